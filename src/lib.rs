//! Constraint-driven password generation.
//!
//! [`Settings`] holds the generation configuration and keeps it consistent
//! (at least one class enabled, length never below the per-class minimums).
//! [`PasswordGenerator`] owns a `Settings` and produces passwords on demand.

pub mod pass;
pub mod settings;

pub use pass::{CharClass, PasswordGenerator, SPECIAL_CHARS};
pub use settings::{Limits, LimitsError, Settings};
