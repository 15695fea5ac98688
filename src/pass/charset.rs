//! Character classes and combined alphabet construction.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in alphabet concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Numbers => 0b0100,
            CharacterClass::Symbols => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown character class: {0} (expected lower, upper, numbers or symbols)")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "numbers" | "digits" | "numeric" => Ok(CharacterClass::Numbers),
            "symbols" | "special" => Ok(CharacterClass::Symbols),
            other => Err(UnknownClass(other.to_string())),
        }
    }
}

/// Set of enabled character classes. May be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses(u8);

impl CharClasses {
    pub const fn empty() -> Self {
        CharClasses(0)
    }

    pub const fn all() -> Self {
        CharClasses(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in fixed order, regardless of how the set was built.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    /// Concatenation of the enabled alphabets. Empty when no class is enabled.
    pub fn alphabet(self) -> Vec<char> {
        self.iter().flat_map(|c| c.alphabet().chars()).collect()
    }

    /// Size of the combined alphabet without building it.
    pub fn alphabet_len(self) -> usize {
        self.iter().map(|c| c.alphabet().len()).sum()
    }
}

impl FromIterator<CharacterClass> for CharClasses {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = CharClasses::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Numbers.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        let all: Vec<char> = CharClasses::all().alphabet();
        let unique: BTreeSet<char> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(CharClasses::all().alphabet_len(), 88);
    }

    #[test]
    fn empty_set_has_empty_alphabet() {
        assert!(CharClasses::empty().is_empty());
        assert!(CharClasses::empty().alphabet().is_empty());
        assert_eq!(CharClasses::empty().alphabet_len(), 0);
    }

    #[test]
    fn alphabet_order_ignores_insertion_order() {
        let a: CharClasses = [CharacterClass::Symbols, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let b: CharClasses = [CharacterClass::Lowercase, CharacterClass::Symbols]
            .into_iter()
            .collect();
        assert_eq!(a.alphabet(), b.alphabet());
        assert_eq!(a.alphabet()[0], 'a');
        assert_eq!(*a.alphabet().last().unwrap(), '?');
    }

    #[test]
    fn toggle_and_set() {
        let mut set = CharClasses::all();
        set.toggle(CharacterClass::Numbers);
        assert!(!set.contains(CharacterClass::Numbers));
        set.toggle(CharacterClass::Numbers);
        assert!(set.contains(CharacterClass::Numbers));
        set.set(CharacterClass::Symbols, false);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn parse_class_names() {
        assert_eq!("lower".parse::<CharacterClass>(), Ok(CharacterClass::Lowercase));
        assert_eq!("Upper".parse::<CharacterClass>(), Ok(CharacterClass::Uppercase));
        assert_eq!("digits".parse::<CharacterClass>(), Ok(CharacterClass::Numbers));
        assert_eq!("symbols".parse::<CharacterClass>(), Ok(CharacterClass::Symbols));
        let err = "emoji".parse::<CharacterClass>().unwrap_err();
        assert_eq!(err, UnknownClass("emoji".into()));
        assert!(err.to_string().starts_with("Unknown character class: emoji"));
    }
}
