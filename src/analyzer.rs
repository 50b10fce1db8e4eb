//! Password analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{AnalyzerConfig, CharsetSizes, ConfigError, LengthBand};
use crate::crack_time::{CrackTime, estimate_crack_time};
use crate::magnitude::Magnitude;
use crate::sections::{
    SectionInput, SectionResult, character_variety_section, criteria_checklist, length_section,
    missing_classes_section, strength_section,
};
use crate::types::{AnalysisResult, CharacterClass, Composition};

/// Delay before an async analysis runs, so bursts of keystrokes only
/// produce one result.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Scores passwords against a fixed [`AnalyzerConfig`].
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    config: AnalyzerConfig,
}

impl PasswordAnalyzer {
    /// # Errors
    ///
    /// Returns error if the configuration fails [`AnalyzerConfig::validate`].
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a password.
    ///
    /// Total and pure: every string, including the empty one, yields a
    /// result.
    pub fn analyze(&self, password: &SecretString) -> AnalysisResult {
        let pwd = password.expose_secret();
        let composition = Composition::from_password(pwd);
        let character_types = composition.character_types();

        // Every character falls into some class, so only "" has none.
        debug_assert!(composition.length == 0 || character_types > 0);

        let character_set_size = character_set_size(&composition, &self.config.charset_sizes);
        let score = length_points(composition.length, &self.config.length_bands)
            + self.config.variety_weights[character_types.min(4)];
        let level = self.config.thresholds.level_for(score);

        // Orchestrator: execute sections in sequence
        let sections: [(&str, fn(SectionInput<'_>) -> SectionResult); 4] = [
            ("length", length_section),
            ("variety", character_variety_section),
            ("missing", missing_classes_section),
            ("strength", strength_section),
        ];

        let input = SectionInput {
            composition: &composition,
            level,
            config: &self.config,
        };
        let mut explanations = Vec::new();
        for (_section_name, section_fn) in sections {
            let remarks = section_fn(input);
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} produced {} remark(s)", _section_name, remarks.len());
            explanations.extend(remarks);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = composition.length,
            character_types,
            character_set_size,
            score,
            level = %level,
            "password analyzed"
        );

        AnalysisResult {
            password: SecretString::new(pwd.to_owned().into()),
            length: composition.length,
            has_lowercase: composition.has_lowercase,
            has_uppercase: composition.has_uppercase,
            has_numbers: composition.has_numbers,
            has_special: composition.has_special,
            character_types,
            character_set_size,
            score,
            strength_level: level,
            explanations,
            total_combinations: Magnitude::power(character_set_size, composition.length),
            criteria: criteria_checklist(&composition, &self.config.length_feedback),
        }
    }

    /// Like [`analyze`](Self::analyze), but treats the empty password as
    /// "nothing to analyze" and returns `None`.
    pub fn analyze_input(&self, password: &SecretString) -> Option<AnalysisResult> {
        if password.expose_secret().is_empty() {
            return None;
        }
        Some(self.analyze(password))
    }

    /// Brute-force estimate for a result at the configured guess rate.
    pub fn crack_time(&self, result: &AnalysisResult) -> Option<CrackTime> {
        estimate_crack_time(result.character_set_size, result.length, self.config.guess_rate)
    }

    /// Debounced analysis that sends its result via channel.
    ///
    /// Waits [`DEBOUNCE`], then drops the request if `token` was cancelled in
    /// the meantime (a newer input superseded it). Otherwise sends the result
    /// of [`analyze_input`](Self::analyze_input); `None` tells the receiver to
    /// clear whatever it shows.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Option<AnalysisResult>>,
    ) {
        tokio::time::sleep(DEBOUNCE).await;

        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return;
        }

        let analysis = self.analyze_input(password);

        if let Err(_e) = tx.send(analysis).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", _e);
        }
    }
}

/// Analyzes a password with the default configuration.
pub fn analyze_password(password: &SecretString) -> AnalysisResult {
    PasswordAnalyzer::default().analyze(password)
}

fn character_set_size(composition: &Composition, sizes: &CharsetSizes) -> u32 {
    CharacterClass::ALL
        .into_iter()
        .filter(|&class| composition.has(class))
        .map(|class| sizes.size_of(class))
        .sum()
}

fn length_points(length: usize, bands: &[LengthBand]) -> f64 {
    bands
        .iter()
        .find(|band| length >= band.min_length)
        .map_or(0.0, |band| band.points)
}
