//! Value objects produced by the analyzer.

use std::fmt;

use secrecy::SecretString;

use crate::magnitude::Magnitude;

/// One of the four character classes used for composition analysis.
///
/// Membership is decided on ASCII ranges only; every character outside
/// `a-z`, `A-Z` and `0-9` (including all non-ASCII text) counts as special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order feedback is emitted.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Returns the class a single character belongs to.
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if c.is_ascii_digit() {
            CharacterClass::Digit
        } else {
            CharacterClass::Special
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase letters",
            CharacterClass::Uppercase => "uppercase letters",
            CharacterClass::Digit => "numbers",
            CharacterClass::Special => "special characters",
        }
    }

    /// Sample of the class shown next to its name in user-facing text.
    pub fn sample(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "a-z",
            CharacterClass::Uppercase => "A-Z",
            CharacterClass::Digit => "0-9",
            CharacterClass::Special => "!@#$%^&*",
        }
    }
}

/// Discrete strength band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Moderate,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// Position of the level, 0 (very weak) to 4 (very strong).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    pub fn emoji(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "\u{274c}",
            StrengthLevel::Weak => "\u{26a0}\u{fe0f}",
            StrengthLevel::Moderate => "\u{2705}",
            StrengthLevel::Strong => "\u{1f510}",
            StrengthLevel::VeryStrong => "\u{1f6e1}\u{fe0f}",
        }
    }

    /// Kebab-case form of the label, e.g. `very-weak`.
    pub fn css_class(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "very-weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Moderate => "moderate",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which character classes a password contains, and how long it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_special: bool,
}

impl Composition {
    pub fn from_password(pwd: &str) -> Self {
        Self {
            length: pwd.chars().count(),
            has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
            has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
            has_numbers: pwd.chars().any(|c| c.is_ascii_digit()),
            has_special: pwd.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.has_lowercase,
            CharacterClass::Uppercase => self.has_uppercase,
            CharacterClass::Digit => self.has_numbers,
            CharacterClass::Special => self.has_special,
        }
    }

    /// Number of classes present, 0 to 4.
    pub fn character_types(&self) -> usize {
        CharacterClass::ALL.iter().filter(|&&c| self.has(c)).count()
    }

    pub fn missing(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&c| !self.has(c))
    }
}

/// A single checklist line with whether the password satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Criterion {
    pub description: String,
    pub met: bool,
}

/// Result of analyzing one password. Built fresh for every input and never
/// mutated afterwards.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub password: SecretString,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_special: bool,
    pub character_types: usize,
    pub character_set_size: u32,
    pub score: f64,
    pub strength_level: StrengthLevel,
    pub explanations: Vec<String>,
    pub total_combinations: Magnitude,
    pub criteria: Vec<Criterion>,
}

impl AnalysisResult {
    pub fn composition(&self) -> Composition {
        Composition {
            length: self.length,
            has_lowercase: self.has_lowercase,
            has_uppercase: self.has_uppercase,
            has_numbers: self.has_numbers,
            has_special: self.has_special,
        }
    }

    /// Whether a brute-force estimate can be derived from this result.
    pub fn is_estimable(&self) -> bool {
        self.length > 0 && self.character_set_size > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_class_of() {
        assert_eq!(CharacterClass::of('q'), CharacterClass::Lowercase);
        assert_eq!(CharacterClass::of('Q'), CharacterClass::Uppercase);
        assert_eq!(CharacterClass::of('7'), CharacterClass::Digit);
        assert_eq!(CharacterClass::of('#'), CharacterClass::Special);
        assert_eq!(CharacterClass::of(' '), CharacterClass::Special);
        assert_eq!(CharacterClass::of('é'), CharacterClass::Special);
        assert_eq!(CharacterClass::of('٣'), CharacterClass::Special);
    }

    #[test]
    fn test_composition_flags() {
        let composition = Composition::from_password("Password1");
        assert_eq!(composition.length, 9);
        assert!(composition.has_lowercase);
        assert!(composition.has_uppercase);
        assert!(composition.has_numbers);
        assert!(!composition.has_special);
        assert_eq!(composition.character_types(), 3);
        assert_eq!(
            composition.missing().collect::<Vec<_>>(),
            vec![CharacterClass::Special]
        );
    }

    #[test]
    fn test_composition_counts_chars_not_bytes() {
        let composition = Composition::from_password("ñandú");
        assert_eq!(composition.length, 5);
        assert!(composition.has_lowercase);
        assert!(composition.has_special);
        assert_eq!(composition.character_types(), 2);
    }

    #[test]
    fn test_composition_empty() {
        let composition = Composition::from_password("");
        assert_eq!(composition, Composition::default());
        assert_eq!(composition.character_types(), 0);
        assert_eq!(composition.missing().count(), 4);
    }

    #[test]
    fn test_strength_level_metadata() {
        for (i, level) in StrengthLevel::ALL.iter().enumerate() {
            assert_eq!(usize::from(level.ordinal()), i);
            assert_eq!(StrengthLevel::from_ordinal(level.ordinal()), Some(*level));
        }
        assert_eq!(StrengthLevel::from_ordinal(5), None);
        assert_eq!(StrengthLevel::VeryStrong.label(), "Very Strong");
        assert_eq!(StrengthLevel::VeryWeak.css_class(), "very-weak");
        assert_eq!(StrengthLevel::Moderate.to_string(), "Moderate");
        assert!(StrengthLevel::Weak < StrengthLevel::Strong);
    }
}
