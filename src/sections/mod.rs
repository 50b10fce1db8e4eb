//! Password feedback sections
//!
//! Each section turns one aspect of the analysis into user-facing text.
//! Sections run in a fixed order and their output is concatenated as-is.

mod criteria;
mod length;
mod strength;
mod variety;

pub use criteria::criteria_checklist;
pub use length::length_section;
pub use strength::strength_section;
pub use variety::{character_variety_section, missing_classes_section};

use crate::config::AnalyzerConfig;
use crate::types::{Composition, StrengthLevel};

/// What a section gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub composition: &'a Composition,
    pub level: StrengthLevel,
    pub config: &'a AnalyzerConfig,
}

/// Remarks emitted by a section, in order. Empty when it has nothing to say.
pub type SectionResult = Vec<String>;
