//! Character variety sections - how many classes are used, and which are missing.

use crate::types::CharacterClass;

use super::{SectionInput, SectionResult};

/// Emits one remark for the number of classes present.
///
/// Zero classes only happens for the empty password; nothing is said then.
pub fn character_variety_section(input: SectionInput<'_>) -> SectionResult {
    let remark = match input.composition.character_types() {
        0 => return Vec::new(),
        1 => "Using only one character type makes the password vulnerable.",
        2 => "Using two character types improves security.",
        3 => "Using three character types provides good security.",
        _ => "Using all four character types maximizes security.",
    };
    vec![remark.to_string()]
}

/// Suggests each absent class, always in the order lowercase, uppercase,
/// numbers, special.
pub fn missing_classes_section(input: SectionInput<'_>) -> SectionResult {
    input
        .composition
        .missing()
        .map(|class| match class {
            CharacterClass::Special => format!(
                "Consider adding {} ({}).",
                class.name(),
                class.sample()
            ),
            _ => format!("Consider adding {}.", class.name()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::types::{Composition, StrengthLevel};

    fn run(section: fn(SectionInput<'_>) -> SectionResult, pwd: &str) -> SectionResult {
        let composition = Composition::from_password(pwd);
        let config = AnalyzerConfig::default();
        section(SectionInput {
            composition: &composition,
            level: StrengthLevel::VeryWeak,
            config: &config,
        })
    }

    #[test]
    fn test_variety_section_one_type() {
        let result = run(character_variety_section, "lowercase");
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("only one"));
    }

    #[test]
    fn test_variety_section_all_types() {
        let result = run(character_variety_section, "HasAll123!@#");
        assert_eq!(
            result,
            vec!["Using all four character types maximizes security.".to_string()]
        );
    }

    #[test]
    fn test_variety_section_empty_password() {
        assert!(run(character_variety_section, "").is_empty());
    }

    #[test]
    fn test_missing_section_order() {
        let result = run(missing_classes_section, "");
        assert_eq!(
            result,
            vec![
                "Consider adding lowercase letters.".to_string(),
                "Consider adding uppercase letters.".to_string(),
                "Consider adding numbers.".to_string(),
                "Consider adding special characters (!@#$%^&*).".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_section_missing_uppercase_and_special() {
        let result = run(missing_classes_section, "lowercase123");
        assert_eq!(result.len(), 2);
        assert!(result[0].contains("uppercase"));
        assert!(result[1].contains("special"));
    }

    #[test]
    fn test_missing_section_all_categories() {
        assert!(run(missing_classes_section, "HasAll123!@#").is_empty());
    }
}
