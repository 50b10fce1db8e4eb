//! Length section - comments on password length.

use super::{SectionInput, SectionResult};

/// Emits exactly one remark for the length band the password falls in.
pub fn length_section(input: SectionInput<'_>) -> SectionResult {
    let length = input.composition.length;
    let bands = &input.config.length_feedback;
    let remark = if length < bands.minimum {
        format!(
            "Password is too short. Use at least {} characters.",
            bands.minimum
        )
    } else if length < bands.good {
        "Password length is acceptable but could be longer.".to_string()
    } else if length < bands.excellent {
        "Good password length.".to_string()
    } else {
        "Excellent password length.".to_string()
    };
    vec![remark]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalyzerConfig, LengthFeedback};
    use crate::types::{Composition, StrengthLevel};

    fn remark_with(config: &AnalyzerConfig, pwd: &str) -> String {
        let composition = Composition::from_password(pwd);
        let input = SectionInput {
            composition: &composition,
            level: StrengthLevel::VeryWeak,
            config,
        };
        let mut result = length_section(input);
        assert_eq!(result.len(), 1);
        result.remove(0)
    }

    fn remark_for(pwd: &str) -> String {
        remark_with(&AnalyzerConfig::default(), pwd)
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            remark_for("Short1!"),
            "Password is too short. Use at least 8 characters."
        );
        assert!(remark_for("").contains("too short"));
    }

    #[test]
    fn test_length_section_bands() {
        assert!(remark_for("12345678").contains("acceptable"));
        assert!(remark_for("12345678901").contains("acceptable"));
        assert_eq!(remark_for("123456789012"), "Good password length.");
        assert_eq!(remark_for("123456789012345"), "Good password length.");
        assert_eq!(remark_for("1234567890123456"), "Excellent password length.");
    }

    #[test]
    fn test_length_section_follows_config() {
        let config = AnalyzerConfig {
            length_feedback: LengthFeedback {
                minimum: 10,
                good: 20,
                excellent: 30,
            },
            ..AnalyzerConfig::default()
        };

        assert_eq!(
            remark_with(&config, "123456789"),
            "Password is too short. Use at least 10 characters."
        );
        assert!(remark_with(&config, "1234567890123456").contains("acceptable"));
        assert_eq!(
            remark_with(&config, &"x".repeat(30)),
            "Excellent password length."
        );
    }
}
