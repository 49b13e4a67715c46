use std::env;
use std::process::ExitCode;

use genpass::PasswordGenerator;

mod cli;
mod error;
mod logging;
mod terminal;
mod tui;

use cli::prompts;

fn main() -> ExitCode {
    logging::init();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let result = match env::args().len() {
        1 => tui::run(PasswordGenerator::new()),
        _ => cli::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::reset_terminal();
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
