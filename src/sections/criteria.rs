//! Criteria checklist - the fixed list of rules shown next to the score.

use crate::config::LengthFeedback;
use crate::types::{CharacterClass, Composition, Criterion};

/// Builds the six-entry checklist: two length rules, then one rule per class.
pub fn criteria_checklist(composition: &Composition, lengths: &LengthFeedback) -> Vec<Criterion> {
    let mut criteria = vec![
        Criterion {
            description: format!(
                "At least {} characters (current: {})",
                lengths.minimum, composition.length
            ),
            met: composition.length >= lengths.minimum,
        },
        Criterion {
            description: format!("At least {} characters (recommended)", lengths.good),
            met: composition.length >= lengths.good,
        },
    ];

    criteria.extend(CharacterClass::ALL.into_iter().map(|class| Criterion {
        description: format!("Contains {} ({})", class.name(), class.sample()),
        met: composition.has(class),
    }));

    criteria
}
