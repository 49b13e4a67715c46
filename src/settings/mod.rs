//! Password generation settings.

mod limits;

pub use limits::{
    Limits, LimitsError, MAX_LENGTH, MAX_LENGTH_CEILING, MAX_MIN_PER_CLASS,
    MAX_MIN_PER_CLASS_CEILING,
};

use crate::pass::charset::{self, CharClass, SPECIAL_CHARS};

pub const DEFAULT_LENGTH: usize = 20;
pub const DEFAULT_MIN_DIGITS: usize = 5;
pub const DEFAULT_MIN_SPECIAL: usize = 5;

/// Generation configuration.
///
/// Every setter leaves the settings consistent: at least one class is
/// enabled and `length` is at least [`Settings::required_length`]. Invalid
/// input is clamped or corrected, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    limits: Limits,
    length: usize,
    include_upper: bool,
    include_lower: bool,
    include_digits: bool,
    include_special: bool,
    min_digits: usize,
    min_special: usize,
    custom_special_chars: String,
}

impl Settings {
    /// Default settings clamped to `limits`.
    pub fn with_limits(limits: Limits) -> Self {
        let mut settings = Self {
            limits,
            length: 0,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_special: true,
            min_digits: DEFAULT_MIN_DIGITS.min(limits.max_min_per_class()),
            min_special: DEFAULT_MIN_SPECIAL.min(limits.max_min_per_class()),
            custom_special_chars: String::new(),
        };
        settings.set_length(DEFAULT_LENGTH);
        settings
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_upper,
            CharClass::Lower => self.include_lower,
            CharClass::Digits => self.include_digits,
            CharClass::Special => self.include_special,
        }
    }

    /// Configured minimum for `class`, whether or not it is enabled.
    pub fn min_count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper | CharClass::Lower => 1,
            CharClass::Digits => self.min_digits,
            CharClass::Special => self.min_special,
        }
    }

    /// Characters `class` must contribute under the current toggles.
    pub fn required(&self, class: CharClass) -> usize {
        if self.includes(class) {
            self.min_count(class)
        } else {
            0
        }
    }

    /// Smallest length satisfying every enabled class's minimum.
    pub fn required_length(&self) -> usize {
        CharClass::ALL.iter().map(|&c| self.required(c)).sum()
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |&c| self.includes(c))
    }

    pub fn custom_special_chars(&self) -> &str {
        &self.custom_special_chars
    }

    /// Alphabet special characters are drawn from.
    pub fn special_alphabet(&self) -> &[u8] {
        if self.custom_special_chars.is_empty() {
            SPECIAL_CHARS
        } else {
            self.custom_special_chars.as_bytes()
        }
    }

    pub fn set_length(&mut self, length: usize) {
        let clamped = length.min(self.limits.max_length());
        self.length = clamped;
        self.raise_length();
        if self.length != length {
            tracing::debug!(requested = length, length = self.length, "length corrected");
        }
    }

    pub fn set_include(&mut self, class: CharClass, enabled: bool) {
        *self.include_mut(class) = enabled;

        if !CharClass::ALL.iter().any(|&c| self.includes(c)) {
            tracing::debug!(%class, "no class left enabled, forcing lowercase");
            self.include_lower = true;
        }
        self.raise_length();
    }

    /// Set the minimum for digits or specials. Upper and lower have a fixed
    /// minimum of one and are left untouched.
    pub fn set_min_count(&mut self, class: CharClass, count: usize) {
        let count = count.min(self.limits.max_min_per_class());
        match class {
            CharClass::Digits => self.min_digits = count,
            CharClass::Special => self.min_special = count,
            CharClass::Upper | CharClass::Lower => {
                tracing::debug!(%class, "minimum count is fixed for this class");
                return;
            }
        }
        self.raise_length();
    }

    pub fn set_custom_special_chars(&mut self, text: &str) {
        let filtered = charset::filter_special(text);
        let dropped = text.chars().count() - filtered.len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded characters outside the special alphabet");
        }
        self.custom_special_chars = filtered;
    }

    fn include_mut(&mut self, class: CharClass) -> &mut bool {
        match class {
            CharClass::Upper => &mut self.include_upper,
            CharClass::Lower => &mut self.include_lower,
            CharClass::Digits => &mut self.include_digits,
            CharClass::Special => &mut self.include_special,
        }
    }

    /// Raise (never lower) length to the required total, within max length.
    fn raise_length(&mut self) {
        let required = self.required_length().min(self.limits.max_length());
        if self.length < required {
            tracing::debug!(from = self.length, to = required, "length raised to fit minimums");
            self.length = required;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_limits(Limits::default())
    }
}
