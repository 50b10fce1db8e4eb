//! Analyzer configuration
//!
//! Every constant that shapes the score lives here, so callers and tests can
//! probe boundaries without touching the scoring code.

use thiserror::Error;

use crate::types::{CharacterClass, StrengthLevel};

/// Assumed adversary throughput, in guesses per second.
pub const DEFAULT_GUESS_RATE: f64 = 1e10;

/// Environment variable overriding the guess rate.
pub const GUESS_RATE_ENV: &str = "PWD_GUESS_RATE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid guess rate {0:?}: not a number")]
    InvalidGuessRate(String),
    #[error("Guess rate must be positive and finite, got {0}")]
    NonPositiveGuessRate(f64),
    #[error("Strength thresholds must be non-negative and strictly descending")]
    UnorderedThresholds,
    #[error("Length bands must be strictly descending with non-increasing points")]
    UnorderedLengthBands,
    #[error("Variety weights must not decrease as classes are added")]
    DecreasingVarietyWeights,
    #[error("Character class {0:?} must have a non-zero size")]
    EmptyCharacterClass(CharacterClass),
    #[error("Feedback lengths must be strictly ascending: minimum < good < excellent")]
    UnorderedFeedbackLengths,
}

/// Assumed alphabet size for each character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetSizes {
    pub lowercase: u32,
    pub uppercase: u32,
    pub digits: u32,
    /// Approximation of common punctuation, not a count of what is present.
    pub special: u32,
}

impl CharsetSizes {
    pub fn size_of(&self, class: CharacterClass) -> u32 {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Special => self.special,
        }
    }
}

impl Default for CharsetSizes {
    fn default() -> Self {
        Self {
            lowercase: 26,
            uppercase: 26,
            digits: 10,
            special: 32,
        }
    }
}

/// A length scoring band: passwords with at least `min_length` characters
/// earn `points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthBand {
    pub min_length: usize,
    pub points: f64,
}

/// Length boundaries used by the length remark and the criteria checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFeedback {
    /// Below this the password is called too short.
    pub minimum: usize,
    /// Recommended length.
    pub good: usize,
    pub excellent: usize,
}

impl Default for LengthFeedback {
    fn default() -> Self {
        Self {
            minimum: 8,
            good: 12,
            excellent: 16,
        }
    }
}

/// Minimum scores for each level above `VeryWeak`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthThresholds {
    pub weak: f64,
    pub moderate: f64,
    pub strong: f64,
    pub very_strong: f64,
}

impl StrengthThresholds {
    /// Maps a score to its level, checking the highest threshold first.
    /// Anything below `weak` (including NaN) is `VeryWeak`.
    pub fn level_for(&self, score: f64) -> StrengthLevel {
        if score >= self.very_strong {
            StrengthLevel::VeryStrong
        } else if score >= self.strong {
            StrengthLevel::Strong
        } else if score >= self.moderate {
            StrengthLevel::Moderate
        } else if score >= self.weak {
            StrengthLevel::Weak
        } else {
            StrengthLevel::VeryWeak
        }
    }
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            weak: 1.0,
            moderate: 2.0,
            strong: 3.5,
            very_strong: 4.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub charset_sizes: CharsetSizes,
    /// Ordered from the longest band down; the first match wins.
    pub length_bands: Vec<LengthBand>,
    /// Points indexed by the number of classes present (0..=4).
    pub variety_weights: [f64; 5],
    pub thresholds: StrengthThresholds,
    pub length_feedback: LengthFeedback,
    pub guess_rate: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            charset_sizes: CharsetSizes::default(),
            length_bands: vec![
                LengthBand {
                    min_length: 16,
                    points: 3.0,
                },
                LengthBand {
                    min_length: 12,
                    points: 2.0,
                },
                LengthBand {
                    min_length: 8,
                    points: 1.0,
                },
                LengthBand {
                    min_length: 4,
                    points: 0.5,
                },
            ],
            variety_weights: [0.0, 0.5, 1.0, 1.5, 2.0],
            thresholds: StrengthThresholds::default(),
            length_feedback: LengthFeedback::default(),
            guess_rate: DEFAULT_GUESS_RATE,
        }
    }
}

impl AnalyzerConfig {
    /// Returns the default configuration with overrides from the environment.
    ///
    /// # Environment Variable
    ///
    /// Set `PWD_GUESS_RATE` to change the assumed guesses per second
    /// (e.g. `1e12`). If not set, [`DEFAULT_GUESS_RATE`] is used.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but does not parse as a positive,
    /// finite number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(GUESS_RATE_ENV) {
            let rate: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidGuessRate(raw.clone()))?;
            config.guess_rate = rate;

            #[cfg(feature = "tracing")]
            tracing::info!("Guess rate overridden from {}: {}", GUESS_RATE_ENV, rate);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_guess_rate(mut self, guess_rate: f64) -> Self {
        self.guess_rate = guess_rate;
        self
    }

    /// Checks the invariants the scoring relies on.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the guess rate is not positive and finite
    /// - thresholds are negative or not strictly descending
    /// - length bands are not strictly descending, or award more points to
    ///   shorter passwords
    /// - variety weights decrease as classes are added
    /// - a character class has size zero
    /// - feedback lengths are not strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(class) = CharacterClass::ALL
            .into_iter()
            .find(|&c| self.charset_sizes.size_of(c) == 0)
        {
            return Err(ConfigError::EmptyCharacterClass(class));
        }

        if !(self.guess_rate > 0.0 && self.guess_rate.is_finite()) {
            return Err(ConfigError::NonPositiveGuessRate(self.guess_rate));
        }

        let t = &self.thresholds;
        let ordered = t.weak >= 0.0
            && t.weak < t.moderate
            && t.moderate < t.strong
            && t.strong < t.very_strong;
        if !ordered {
            return Err(ConfigError::UnorderedThresholds);
        }

        let bands_ordered = self.length_bands.windows(2).all(|w| {
            w[0].min_length > w[1].min_length && w[0].points >= w[1].points
        }) && self.length_bands.iter().all(|b| b.points >= 0.0);
        if !bands_ordered {
            return Err(ConfigError::UnorderedLengthBands);
        }

        let weights_ordered = self.variety_weights[0] >= 0.0
            && self.variety_weights.windows(2).all(|w| w[0] <= w[1]);
        if !weights_ordered {
            return Err(ConfigError::DecreasingVarietyWeights);
        }

        let f = &self.length_feedback;
        if !(f.minimum < f.good && f.good < f.excellent) {
            return Err(ConfigError::UnorderedFeedbackLengths);
        }

        Ok(())
    }
}
