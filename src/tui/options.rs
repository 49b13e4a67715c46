use std::io;
use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{KeyCode, KeyEvent};
use genpass::{CharClass, PasswordGenerator};
use zeroize::Zeroize;

use super::input::{Edit, prompt_number, prompt_text};
use super::text::{print_help, print_view};
use super::Status;
use crate::error::AppError;
use crate::terminal::{clear, is_ctrl, read_key, reset_terminal};

/// How long the copied highlight stays on.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

use LoopAction::*;
enum LoopAction {
    Quit,
    Show(Status),
}

pub fn main_loop(mut generator: PasswordGenerator) -> Result<(), AppError> {
    let mut clipboard: Option<ClipboardContext> = None;
    let mut status = Status::Idle;

    loop {
        match status {
            Status::Help => print_help(),
            _ => print_view(&generator, &status),
        }

        let timeout = match status {
            Status::Copied(at) => Some(COPIED_FEEDBACK.saturating_sub(at.elapsed())),
            _ => None,
        };
        let Some(key) = read_key(timeout)? else {
            // highlight expired
            status = Status::Idle;
            continue;
        };

        if matches!(status, Status::Help) && !is_ctrl(&key, 'c') {
            status = Status::Idle;
            continue;
        }

        match handle_key(&mut generator, &mut clipboard, key)? {
            Quit => break,
            Show(next) => status = next,
        }
    }

    clear();
    reset_terminal();
    Ok(())
}

fn handle_key(
    generator: &mut PasswordGenerator,
    clipboard: &mut Option<ClipboardContext>,
    key: KeyEvent,
) -> io::Result<LoopAction> {
    if is_ctrl(&key, 'c') {
        return Ok(Quit);
    }

    let status = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Ok(Quit),
        KeyCode::Enter | KeyCode::Char('g') => {
            generator.generate();
            Status::Idle
        }
        KeyCode::Char('c') => match copy(clipboard, generator.password()) {
            Ok(()) => Status::Copied(Instant::now()),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                Status::Notice(e.to_string())
            }
        },
        KeyCode::Char('r') => {
            generator.reset();
            generator.generate();
            Status::Idle
        }
        KeyCode::Char('h') => Status::Help,
        KeyCode::Char('1') => {
            let max = generator.limits().max_length();
            match prompt_number("Password length", generator.settings().length(), max)? {
                Edit::Accepted(n) => {
                    generator.set_length(n);
                    generator.generate();
                    Status::Idle
                }
                Edit::Cancelled => Status::Idle,
                Edit::Interrupted => return Ok(Quit),
            }
        }
        KeyCode::Char('2') => toggle(generator, CharClass::Upper),
        KeyCode::Char('3') => toggle(generator, CharClass::Lower),
        KeyCode::Char('4') => toggle(generator, CharClass::Digits),
        KeyCode::Char('6') => toggle(generator, CharClass::Special),
        KeyCode::Char('5') => return min_count(generator, CharClass::Digits, '4'),
        KeyCode::Char('7') => return min_count(generator, CharClass::Special, '6'),
        KeyCode::Char('8') => {
            if !generator.settings().includes(CharClass::Special) {
                return Ok(Show(disabled(CharClass::Special, '6')));
            }
            let current = generator.settings().custom_special_chars().to_string();
            match prompt_text("Special characters (empty for all)", &current)? {
                Edit::Accepted(text) => {
                    generator.set_custom_special_chars(text.trim());
                    generator.generate();
                    Status::Idle
                }
                Edit::Cancelled => Status::Idle,
                Edit::Interrupted => return Ok(Quit),
            }
        }
        _ => Status::Notice("Invalid option, press h for help.".to_string()),
    };
    Ok(Show(status))
}

fn toggle(generator: &mut PasswordGenerator, class: CharClass) -> Status {
    let enabled = generator.settings().includes(class);
    generator.set_include(class, !enabled);
    generator.generate();
    Status::Idle
}

fn min_count(
    generator: &mut PasswordGenerator,
    class: CharClass,
    toggle_key: char,
) -> io::Result<LoopAction> {
    if !generator.settings().includes(class) {
        return Ok(Show(disabled(class, toggle_key)));
    }
    let prompt = format!("Minimum {class}");
    let current = generator.settings().min_count(class);
    let max = generator.limits().max_min_per_class();
    Ok(match prompt_number(&prompt, current, max)? {
        Edit::Accepted(n) => {
            generator.set_min_count(class, n);
            generator.generate();
            Show(Status::Idle)
        }
        Edit::Cancelled => Show(Status::Idle),
        Edit::Interrupted => Quit,
    })
}

fn disabled(class: CharClass, toggle_key: char) -> Status {
    Status::Notice(format!("Enable {class} first ({toggle_key})."))
}

fn copy(clipboard: &mut Option<ClipboardContext>, password: &str) -> Result<(), AppError> {
    let ctx = match clipboard.take() {
        Some(ctx) => ctx,
        None => ClipboardContext::new().map_err(|e| AppError::Clipboard(e.to_string()))?,
    };
    let ctx = clipboard.insert(ctx);

    let mut contents = password.to_string();
    let result = ctx.set_contents(contents.clone());
    contents.zeroize();
    result.map_err(|e| AppError::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use genpass::Settings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> PasswordGenerator {
        PasswordGenerator::with_rng(Settings::default(), StdRng::seed_from_u64(7))
    }

    fn press(generator: &mut PasswordGenerator, c: char) -> LoopAction {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        handle_key(generator, &mut None, key).unwrap()
    }

    #[test]
    fn toggles_change_setting_and_regenerate() {
        let mut generator = generator();
        for (key, class) in [
            ('2', CharClass::Upper),
            ('4', CharClass::Digits),
            ('6', CharClass::Special),
        ] {
            let before = generator.password().to_string();
            assert!(matches!(press(&mut generator, key), Show(Status::Idle)));
            assert!(!generator.settings().includes(class));
            assert_ne!(generator.password(), before);
            assert!(!generator.password().chars().any(|c| {
                genpass::pass::charset::classify(c) == Some(class)
            }));
        }
    }

    #[test]
    fn generate_keys_regenerate() {
        let mut generator = generator();
        let before = generator.password().to_string();
        press(&mut generator, 'g');
        assert_ne!(generator.password(), before);

        let before = generator.password().to_string();
        handle_key(&mut generator, &mut None, KeyEvent::from(KeyCode::Enter)).unwrap();
        assert_ne!(generator.password(), before);
    }

    #[test]
    fn reset_restores_defaults_and_regenerates() {
        let mut generator = generator();
        generator.set_length(64);
        generator.set_include(CharClass::Digits, false);
        generator.generate();
        let before = generator.password().to_string();

        assert!(matches!(press(&mut generator, 'r'), Show(Status::Idle)));
        assert_eq!(generator.settings(), &Settings::default());
        assert_eq!(generator.password().len(), 20);
        assert_ne!(generator.password(), before);
    }

    #[test]
    fn minimum_of_disabled_class_is_refused() {
        let mut generator = generator();
        press(&mut generator, '4');
        let before = generator.password().to_string();

        let action = press(&mut generator, '5');
        assert!(matches!(action, Show(Status::Notice(ref msg)) if msg.contains("(4)")));
        assert_eq!(generator.password(), before);
    }

    #[test]
    fn quit_and_unknown_keys() {
        let mut generator = generator();
        assert!(matches!(press(&mut generator, 'q'), Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key(&mut generator, &mut None, ctrl_c).unwrap(), Quit));

        let before = generator.password().to_string();
        assert!(matches!(press(&mut generator, 'x'), Show(Status::Notice(_))));
        assert_eq!(generator.password(), before);
    }
}
