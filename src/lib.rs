//! Password composition analysis library
//!
//! This library scores passwords from their length and the character
//! classes they use, explains the score in plain language, and estimates
//! how long a naive brute-force attack would take.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable analysis over a channel
//! - `serde` (default): Enables serialization of analysis results
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GUESS_RATE`: Assumed guesses per second for crack-time estimates
//!   (default: `1e10`), read by [`AnalyzerConfig::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{AnalyzerConfig, PasswordAnalyzer, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let analyzer = PasswordAnalyzer::new(AnalyzerConfig::default()).expect("valid config");
//!
//! let password = SecretString::new("Password1".to_string().into());
//! let analysis = analyzer.analyze(&password);
//!
//! assert_eq!(analysis.strength_level, StrengthLevel::Moderate);
//! for line in &analysis.explanations {
//!     println!("- {}", line);
//! }
//!
//! if let Some(crack_time) = analyzer.crack_time(&analysis) {
//!     println!("Total combinations: {}", crack_time.total_combinations);
//!     println!(
//!         "Estimated time at {} guesses/s: {}",
//!         analyzer.config().guess_rate,
//!         crack_time
//!     );
//! }
//! ```

// Internal modules
mod analyzer;
mod config;
mod crack_time;
mod magnitude;
mod sections;
mod types;

// Public API
pub use analyzer::{PasswordAnalyzer, analyze_password};
pub use config::{
    AnalyzerConfig, CharsetSizes, ConfigError, DEFAULT_GUESS_RATE, GUESS_RATE_ENV, LengthBand,
    LengthFeedback, StrengthThresholds,
};
pub use crack_time::{CrackTime, estimate_crack_time, format_duration, format_number};
pub use magnitude::Magnitude;
pub use types::{AnalysisResult, CharacterClass, Composition, Criterion, StrengthLevel};

#[cfg(feature = "async")]
pub use analyzer::DEBOUNCE;
