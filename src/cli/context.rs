//! CLI context - bundles the generator, flags, and clipboard state.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use genpass::{CharClass, Limits, PasswordGenerator, Settings};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::error::AppError;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    generator: PasswordGenerator,
    clipboard: Option<ClipboardContext>,
    flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Result<Self, AppError> {
        prompts::set_quiet(flags.quiet);
        let limits = Limits::new(flags.max_length, flags.max_min)?;
        let mut ctx = Self {
            generator: PasswordGenerator::with_settings(Settings::with_limits(limits)),
            clipboard: None,
            flags,
        };
        for warning in ctx.apply_flags() {
            prompts::warn(&warning);
        }
        Ok(ctx)
    }

    #[cfg(test)]
    fn settings(&self) -> &Settings {
        self.generator.settings()
    }

    pub fn run(mut self) -> Result<(), AppError> {
        if self.flags.interactive {
            self.generator.generate();
            return tui::run(self.generator);
        }
        if self.flags.clipboard && !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output()
    }

    /// Apply flags to settings: toggles first, so minimums and length are
    /// reconciled against the final set of classes. Returns a warning for
    /// every explicit request the settings had to correct.
    fn apply_flags(&mut self) -> Vec<String> {
        let flags = &self.flags;
        let generator = &mut self.generator;
        let mut warnings = Vec::new();

        for (class, off) in [
            (CharClass::Upper, flags.no_upper),
            (CharClass::Lower, flags.no_lower),
            (CharClass::Digits, flags.no_digits),
            (CharClass::Special, flags.no_special),
        ] {
            if off {
                generator.set_include(class, false);
            }
        }
        if flags.no_upper && flags.no_lower && flags.no_digits && flags.no_special {
            warnings.push("Warning: every class disabled, keeping lowercase".to_string());
        }

        for (class, requested) in [
            (CharClass::Digits, flags.min_digits),
            (CharClass::Special, flags.min_special),
        ] {
            let Some(requested) = requested else {
                continue;
            };
            generator.set_min_count(class, requested);
            let actual = generator.settings().min_count(class);
            if actual != requested {
                warnings.push(prompts::adjusted(&format!("minimum {class}"), requested, actual));
            }
        }

        if let Some(ref chars) = flags.special_chars {
            generator.set_custom_special_chars(chars);
            let kept = generator.settings().custom_special_chars();
            if kept != chars.as_str() {
                warnings.push(prompts::special_chars_dropped(chars, kept));
            }
        }

        if let Some(requested) = flags.length {
            generator.set_length(requested);
            let actual = generator.settings().length();
            if actual != requested {
                warnings.push(prompts::adjusted("length", requested, actual));
            }
        }
        warnings
    }

    /// Returns false if the user chose to abort.
    fn open_clipboard(&mut self) -> bool {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    prompts::warn("Clipboard unavailable, printing instead");
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), AppError> {
        let count = self.flags.number.max(1);

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut passwords = String::new();
            for i in 0..count {
                if i > 0 {
                    passwords.push('\n');
                }
                passwords.push_str(self.generator.generate());
            }
            let result = ctx.set_contents(passwords.clone());
            passwords.zeroize();
            result.map_err(|e| AppError::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(count);
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for _ in 0..count {
            let written = out
                .write_all(self.generator.generate().as_bytes())
                .and_then(|()| out.write_all(b"\n"));
            match written {
                Ok(()) => {}
                // reader went away, e.g. `genpass -n 100 | head`
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use genpass::LimitsError;

    fn flags(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("genpass").chain(args.iter().copied())).unwrap()
    }

    fn context(args: &[&str]) -> Result<Context, AppError> {
        Context::new(flags(args))
    }

    /// Warnings `apply_flags` reports for `args`, starting from fresh settings.
    fn warnings(args: &[&str]) -> Vec<String> {
        let flags = flags(args);
        let limits = Limits::new(flags.max_length, flags.max_min).unwrap();
        let mut ctx = Context {
            generator: PasswordGenerator::with_settings(Settings::with_limits(limits)),
            clipboard: None,
            flags,
        };
        ctx.apply_flags()
    }

    #[test]
    fn default_flags_give_default_settings() {
        let ctx = context(&["-q"]).unwrap();
        assert_eq!(ctx.settings(), &Settings::default());
    }

    #[test]
    fn short_length_is_raised_after_toggles() {
        let ctx = context(&["-q", "--no-digits", "-l", "3"]).unwrap();
        // one upper, one lower, five specials
        assert_eq!(ctx.settings().length(), 7);
        assert!(!ctx.settings().includes(CharClass::Digits));
    }

    #[test]
    fn large_minimums_raise_default_length() {
        let ctx = context(&["-q", "--min-digits", "10", "--min-special", "10"]).unwrap();
        assert_eq!(ctx.settings().length(), 22);
    }

    #[test]
    fn minimums_clamped_to_max_min() {
        let ctx = context(&["-q", "--min-digits", "40", "--max-min", "4", "--max-length", "10"])
            .unwrap();
        assert_eq!(ctx.settings().min_count(CharClass::Digits), 4);
        assert_eq!(ctx.settings().length(), 10);
    }

    #[test]
    fn special_chars_filtered() {
        let ctx = context(&["-q", "--special-chars", "ab!@#xyz"]).unwrap();
        assert_eq!(ctx.settings().custom_special_chars(), "!@#");
    }

    #[test]
    fn all_classes_off_keeps_lowercase() {
        let ctx = context(&["-q", "--no-upper", "--no-lower", "--no-digits", "--no-special"])
            .unwrap();
        let enabled: Vec<_> = ctx.settings().enabled_classes().collect();
        assert_eq!(enabled, vec![CharClass::Lower]);
        assert_eq!(ctx.settings().length(), 20);
    }

    #[test]
    fn default_minimums_clamped_without_warning() {
        assert_eq!(warnings(&["--max-min", "4", "--max-length", "10"]), Vec::<String>::new());
        let ctx = context(&["-q", "--max-min", "4", "--max-length", "10"]).unwrap();
        assert_eq!(ctx.settings().min_count(CharClass::Digits), 4);
        assert_eq!(ctx.settings().min_count(CharClass::Special), 4);
    }

    #[test]
    fn explicit_requests_warn_when_corrected() {
        let warnings = warnings(&[
            "--max-min", "4", "--max-length", "10", "--min-digits", "9", "-l", "50",
        ]);
        assert_eq!(
            warnings,
            vec![
                "Warning: minimum digits 9 adjusted to 4".to_string(),
                "Warning: length 50 adjusted to 10".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_limits_rejected() {
        let err = context(&["-q", "--max-length", "10"]).err().unwrap();
        assert!(matches!(err, AppError::Limits(LimitsError::TooShort { .. })));
    }
}
