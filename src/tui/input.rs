use std::io;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::terminal::{RawModeGuard, flush, is_ctrl, next_key};

/// Outcome of an inline prompt.
pub enum Edit<T> {
    Accepted(T),
    /// Esc or Ctrl+Q: keep the old value.
    Cancelled,
    /// Ctrl+C: leave the application.
    Interrupted,
}

/// Prompt for a number in `0..=max`, prefilled with `initial`.
/// Larger values are passed through; the settings clamp them.
pub fn prompt_number(prompt: &str, initial: usize, max: usize) -> io::Result<Edit<usize>> {
    let label = format!("{prompt} (0-{max})");
    let edit = edit_line(&label, &initial.to_string(), |c| c.is_ascii_digit())?;
    Ok(match edit {
        Edit::Accepted(text) if text.is_empty() => Edit::Accepted(0),
        Edit::Accepted(text) => match text.parse() {
            Ok(n) => Edit::Accepted(n),
            // too many digits for usize
            Err(_) => Edit::Accepted(usize::MAX),
        },
        Edit::Cancelled => Edit::Cancelled,
        Edit::Interrupted => Edit::Interrupted,
    })
}

/// Prompt for free text, prefilled with `initial`.
pub fn prompt_text(prompt: &str, initial: &str) -> io::Result<Edit<String>> {
    edit_line(prompt, initial, |c| !c.is_control())
}

/// Single-line editor: arrows/Home/End move, Backspace/Delete erase,
/// Ctrl+U clears. Only characters passing `accept` are inserted.
fn edit_line(
    prompt: &str,
    initial: &str,
    accept: impl Fn(char) -> bool,
) -> io::Result<Edit<String>> {
    let mut buf: Vec<char> = initial.chars().collect();
    let mut cursor = buf.len();
    let mut drawn = buf.len();

    let guard = RawModeGuard::new()?;
    redraw(prompt, &buf, cursor, drawn);

    let outcome = loop {
        let Some(key) = next_key(None)? else {
            continue;
        };

        if is_ctrl(&key, 'c') {
            break Edit::Interrupted;
        }
        if is_ctrl(&key, 'q') {
            break Edit::Cancelled;
        }
        if is_ctrl(&key, 'u') {
            buf.clear();
            cursor = 0;
        } else {
            match key.code {
                KeyCode::Esc => break Edit::Cancelled,
                KeyCode::Enter => break Edit::Accepted(buf.iter().collect()),
                KeyCode::Backspace if cursor > 0 => {
                    cursor -= 1;
                    buf.remove(cursor);
                }
                KeyCode::Delete if cursor < buf.len() => {
                    buf.remove(cursor);
                }
                KeyCode::Left => cursor = cursor.saturating_sub(1),
                KeyCode::Right => cursor = (cursor + 1).min(buf.len()),
                KeyCode::Home => cursor = 0,
                KeyCode::End => cursor = buf.len(),
                KeyCode::Char(c) if accept(c) && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buf.insert(cursor, c);
                    cursor += 1;
                }
                _ => {}
            }
        }

        redraw(prompt, &buf, cursor, drawn);
        drawn = drawn.max(buf.len());
    };

    drop(guard);
    println!();
    Ok(outcome)
}

fn redraw(prompt: &str, buf: &[char], cursor: usize, drawn: usize) {
    let text: String = buf.iter().collect();
    print!("\r{prompt}: {}", " ".repeat(drawn + 1));
    print!("\r{prompt}: {text}");
    // columns are 1-based
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
}
