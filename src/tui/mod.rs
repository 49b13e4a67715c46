//! Interactive TUI.
//!
//! Holds the generator for the session, applies each setting change and
//! regenerates right after it.

mod input;
mod options;
mod text;

use std::time::Instant;

use genpass::PasswordGenerator;

use crate::error::AppError;

/// What the view shows besides the password and settings.
pub enum Status {
    Idle,
    /// Password copied at this instant; highlighted until it expires.
    Copied(Instant),
    Notice(String),
    Help,
}

/// Run TUI interactive mode.
pub fn run(generator: PasswordGenerator) -> Result<(), AppError> {
    options::main_loop(generator)
}
