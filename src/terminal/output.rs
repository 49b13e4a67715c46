//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// ┌─ Title ──────┐, or a plain top border when `title` is empty.
pub fn box_top(title: &str) {
    box_top_styled(title, "");
}

/// Top border drawn in `style` (an ANSI sequence, or empty).
pub fn box_top_styled(title: &str, style: &str) {
    let title_part = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let rest = BOX_WIDTH - 2 - title_part.chars().count();
    println!("{style}┌{title_part}{}┐{RESET}", "─".repeat(rest));
}

pub fn box_line(content: &str) {
    print_boxed(content, Align::Left, "");
}

pub fn box_line_center(content: &str) {
    print_boxed(content, Align::Center, "");
}

/// Centered line with border and content drawn in `style`.
pub fn box_line_styled(content: &str, style: &str) {
    print_boxed(content, Align::Center, style);
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    box_bottom_styled("");
}

pub fn box_bottom_styled(style: &str) {
    println!("{style}└{}┘{RESET}", "─".repeat(BOX_WIDTH - 2));
}

fn print_boxed(content: &str, align: Align, style: &str) {
    let pad = INNER_WIDTH.saturating_sub(console_width(content));
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Center => (pad / 2, pad - pad / 2),
    };
    println!(
        "{style}│{RESET} {}{style}{content}{RESET}{} {style}│{RESET}",
        " ".repeat(left),
        " ".repeat(right)
    );
}

/// Key or flag column plus a description wrapped to the remaining width.
pub fn box_opt(key: &str, desc: &str) {
    const KEY_COL: usize = 16;
    let desc_col = INNER_WIDTH - KEY_COL;

    let mut lines: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= desc_col => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    for (i, line) in lines.iter().enumerate() {
        let first = if i == 0 { key } else { "" };
        box_line(&format!("{first:<KEY_COL$}{line}"));
    }
}

/// Display width of `s`, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{GREEN}abc{RESET}")), 3);
        assert_eq!(console_width("─ é"), 3);
    }
}
