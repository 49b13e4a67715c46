//! Character classes and password generation.

pub mod charset;
mod generate;

pub use charset::{CharClass, SPECIAL_CHARS};
pub use generate::PasswordGenerator;
