//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, key reading and ANSI helpers.

mod keys;
mod output;

pub use keys::*;
pub use output::*;
