//! Non-interactive mode: flags in, passwords out.

mod args;
mod context;
pub mod prompts;

use clap::Parser;

pub use args::CliFlags;
pub use context::Context;

use crate::error::AppError;

pub fn run() -> Result<(), AppError> {
    Context::new(CliFlags::parse())?.run()
}
