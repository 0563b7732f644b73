//! Character classes and alphabet building.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@%*?$&+-#";

/// Class substituted when nothing is selected.
pub const DEFAULT_CLASS: CharacterClass = CharacterClass::Uppercase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digits => 0b0100,
            CharacterClass::Symbols => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of selected character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
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

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, on: bool) {
        if on {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Selected classes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// The classes actually used for `classes`: an empty selection becomes
/// [`DEFAULT_CLASS`].
pub fn effective(classes: ClassSet) -> ClassSet {
    if classes.is_empty() {
        [DEFAULT_CLASS].into_iter().collect()
    } else {
        classes
    }
}

/// Build the alphabet for the selected classes. Never empty.
pub fn build(classes: ClassSet) -> String {
    effective(classes).iter().map(CharacterClass::chars).collect()
}

/// Alphabet size for the selected classes, without building it.
pub fn size(classes: ClassSet) -> usize {
    effective(classes).iter().map(|c| c.chars().len()).sum()
}
