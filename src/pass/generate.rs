//! Password generation.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, Zeroizing};

use super::charset::CharClass;
use crate::settings::{Limits, Settings};

/// Owns a [`Settings`] and produces passwords satisfying it.
///
/// The caller mutates settings through the setters and decides when to call
/// [`generate`](Self::generate); nothing regenerates implicitly. The most
/// recent password is kept until the next `generate` and zeroized when
/// replaced or dropped.
///
/// Setters read the derived minimum length and then write it back, so a
/// generator shared between threads must sit behind a lock.
pub struct PasswordGenerator<R = StdRng> {
    settings: Settings,
    rng: R,
    password: Zeroizing<String>,
}

impl PasswordGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Build a generator and produce its initial password.
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        let mut generator = Self {
            settings,
            rng,
            password: Zeroizing::new(String::new()),
        };
        generator.generate();
        generator
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn limits(&self) -> Limits {
        self.settings.limits()
    }

    pub fn length(&self) -> usize {
        self.settings.length()
    }

    pub fn includes(&self, class: CharClass) -> bool {
        self.settings.includes(class)
    }

    pub fn min_count(&self, class: CharClass) -> usize {
        self.settings.min_count(class)
    }

    pub fn custom_special_chars(&self) -> &str {
        self.settings.custom_special_chars()
    }

    pub fn required_length(&self) -> usize {
        self.settings.required_length()
    }

    /// The most recently generated password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn set_length(&mut self, length: usize) {
        self.settings.set_length(length);
    }

    pub fn set_include(&mut self, class: CharClass, enabled: bool) {
        self.settings.set_include(class, enabled);
    }

    pub fn set_min_count(&mut self, class: CharClass, count: usize) {
        self.settings.set_min_count(class, count);
    }

    pub fn set_custom_special_chars(&mut self, text: &str) {
        self.settings.set_custom_special_chars(text);
    }

    /// Restore default settings, keeping the current limits.
    pub fn reset(&mut self) {
        self.settings = Settings::with_limits(self.settings.limits());
    }

    /// Generate a new password, replacing the current one.
    pub fn generate(&mut self) -> &str {
        let mut chars = build(&self.settings, &mut self.rng);
        self.password = Zeroizing::new(chars.iter().map(|&b| b as char).collect());
        chars.zeroize();
        tracing::trace!(length = self.password.len(), "password generated");
        self.password.as_str()
    }
}

/// Required characters first, then the fill, then a uniform shuffle.
///
/// The fill never removes required characters: if the minimums exceed
/// `length` the result is longer than `length`. Settings setters prevent
/// that state.
fn build<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Vec<u8> {
    let specials = settings.special_alphabet();
    let mut chars = Vec::with_capacity(settings.length().max(settings.required_length()));

    for class in settings.enabled_classes() {
        for _ in 0..settings.required(class) {
            chars.push(class.sample(rng, specials));
        }
    }

    let enabled: Vec<CharClass> = settings.enabled_classes().collect();
    let remaining = settings.length().saturating_sub(chars.len());
    for _ in 0..remaining {
        let Some(&class) = enabled.choose(rng) else {
            break;
        };
        chars.push(class.sample(rng, specials));
    }

    chars.shuffle(rng);
    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::classify;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn count(chars: &[u8], class: CharClass) -> usize {
        chars
            .iter()
            .filter(|&&b| classify(b as char) == Some(class))
            .count()
    }

    #[test]
    fn build_meets_default_minimums() {
        let settings = Settings::default();
        let mut rng = seeded(1);
        for _ in 0..200 {
            let chars = build(&settings, &mut rng);
            assert_eq!(chars.len(), 20);
            assert!(count(&chars, CharClass::Upper) >= 1);
            assert!(count(&chars, CharClass::Lower) >= 1);
            assert!(count(&chars, CharClass::Digits) >= 5);
            assert!(count(&chars, CharClass::Special) >= 5);
        }
    }

    #[test]
    fn build_only_uses_enabled_classes() {
        let mut settings = Settings::default();
        settings.set_include(CharClass::Upper, false);
        settings.set_include(CharClass::Special, false);
        let mut rng = seeded(2);
        for _ in 0..200 {
            let chars = build(&settings, &mut rng);
            assert_eq!(count(&chars, CharClass::Upper), 0);
            assert_eq!(count(&chars, CharClass::Special), 0);
            assert_eq!(
                count(&chars, CharClass::Lower) + count(&chars, CharClass::Digits),
                chars.len()
            );
        }
    }

    #[test]
    fn required_characters_are_not_clustered_at_front() {
        // unshuffled, position 0 would always hold the required uppercase
        let settings = Settings::default();
        let mut rng = seeded(3);
        let mut leading = [false; 4];
        for _ in 0..500 {
            let chars = build(&settings, &mut rng);
            if let Some(class) = classify(chars[0] as char) {
                leading[CharClass::ALL.iter().position(|&c| c == class).unwrap()] = true;
            }
        }
        assert!(leading.iter().all(|seen| *seen));
    }

    #[test]
    fn tight_limits_fill_exactly_with_minimums() {
        let limits = Limits::new(12, 5).unwrap();
        let mut settings = Settings::with_limits(limits);
        settings.set_length(12);
        let mut rng = seeded(4);
        let chars = build(&settings, &mut rng);
        assert_eq!(chars.len(), 12);
        assert_eq!(count(&chars, CharClass::Digits), 5);
        assert_eq!(count(&chars, CharClass::Special), 5);
    }

    #[test]
    fn generate_replaces_current_password() {
        let mut generator = PasswordGenerator::with_rng(Settings::default(), seeded(5));
        let first = generator.password().to_string();
        assert_eq!(first.len(), 20);
        let second = generator.generate().to_string();
        assert_ne!(first, second);
        assert_eq!(generator.password(), second);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut generator = PasswordGenerator::with_rng(Settings::default(), seeded(6));
        generator.set_length(90);
        generator.set_include(CharClass::Upper, false);
        generator.set_custom_special_chars("!!");
        generator.reset();
        assert_eq!(generator.settings(), &Settings::default());
        assert_eq!(generator.length(), 20);
        assert!(generator.includes(CharClass::Upper));
        assert_eq!(generator.custom_special_chars(), "");
        assert_eq!(generator.required_length(), 12);
        assert_eq!(generator.min_count(CharClass::Digits), 5);
    }
}
