//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings and confirmations; errors are always shown.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a tty.
fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Warning to stderr in yellow.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr in red.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Message for a flag value the settings had to correct.
pub fn adjusted(what: &str, requested: usize, actual: usize) -> String {
    format!("Warning: {what} {requested} adjusted to {actual}")
}

pub fn special_chars_dropped(requested: &str, kept: &str) -> String {
    if kept.is_empty() {
        format!("Warning: no usable special characters in {requested:?}, using the full set")
    } else {
        format!("Warning: special set {requested:?} reduced to {kept:?}")
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive or quiet runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet() || !is_interactive() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => true,
        _ => {
            eprintln!("Aborted.");
            false
        }
    }
}
