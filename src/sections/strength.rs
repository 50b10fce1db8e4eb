//! Strength section - closing remark for the strength level.

use crate::types::StrengthLevel;

use super::{SectionInput, SectionResult};

pub fn strength_section(input: SectionInput<'_>) -> SectionResult {
    let remark = match input.level {
        StrengthLevel::VeryWeak => "This password can be cracked almost instantly.",
        StrengthLevel::Weak => "This password can be cracked quickly with modern hardware.",
        StrengthLevel::Moderate => {
            "This password provides basic protection but could be stronger."
        }
        StrengthLevel::Strong => {
            "This password provides good protection against brute-force attacks."
        }
        StrengthLevel::VeryStrong => {
            "This password provides excellent protection against brute-force attacks."
        }
    };
    vec![remark.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::types::Composition;

    #[test]
    fn test_strength_section_one_remark_per_level() {
        let composition = Composition::default();
        let config = AnalyzerConfig::default();
        let remarks: Vec<String> = StrengthLevel::ALL
            .iter()
            .map(|&level| {
                let result = strength_section(SectionInput {
                    composition: &composition,
                    level,
                    config: &config,
                });
                assert_eq!(result.len(), 1);
                result[0].clone()
            })
            .collect();

        assert!(remarks[0].contains("almost instantly"));
        assert!(remarks[4].contains("excellent protection"));
        for (i, a) in remarks.iter().enumerate() {
            for b in &remarks[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
