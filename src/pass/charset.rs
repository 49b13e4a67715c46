//! Character classes and their alphabets.

use std::fmt;

use rand::Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Built-in special characters. Custom special sets are restricted to these.
pub const SPECIAL_CHARS: &[u8] = b"!#$%&()*+?@[]^{}~";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Special,
    ];

    /// Built-in alphabet of the class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL_CHARS,
        }
    }

    /// Whether the class has a user-configurable minimum count.
    /// Upper and lower always contribute exactly one required character.
    pub fn has_min_count(self) -> bool {
        matches!(self, CharClass::Digits | CharClass::Special)
    }

    /// Draw one character uniformly from the class.
    ///
    /// `specials` replaces the built-in special alphabet and must not be empty.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R, specials: &[u8]) -> u8 {
        let chars = match self {
            CharClass::Special => specials,
            other => other.alphabet(),
        };
        chars[rng.random_range(0..chars.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Special => "special",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keep only characters of the built-in special alphabet, in order.
pub fn filter_special(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii() && SPECIAL_CHARS.contains(&(*c as u8)))
        .collect()
}

/// Which class a character belongs to, if any.
pub fn classify(c: char) -> Option<CharClass> {
    if !c.is_ascii() {
        return None;
    }
    let b = c as u8;
    CharClass::ALL
        .into_iter()
        .find(|class| class.alphabet().contains(&b))
}
