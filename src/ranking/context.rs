//! Per-section ranking context.

use std::collections::{HashMap, HashSet};

use crate::models::{SectionId, StaffId};

/// What ranking rules may know about the section being filled.
#[derive(Debug, Clone, Default)]
pub struct RankingContext {
    /// Section being filled.
    pub section_id: SectionId,
    /// Staff the section's professor prefers.
    pub professor_preferred: HashSet<StaffId>,
    /// Each candidate's own preference score for this section (0..=2).
    pub preference_scores: HashMap<StaffId, u8>,
}

impl RankingContext {
    /// Creates an empty context for a section.
    pub fn for_section(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            ..Default::default()
        }
    }

    /// Marks a staff member as professor-preferred.
    pub fn with_professor_preferred(mut self, staff_id: impl Into<String>) -> Self {
        self.professor_preferred.insert(staff_id.into());
        self
    }

    /// Sets a staff member's preference score for this section.
    pub fn with_preference_score(mut self, staff_id: impl Into<String>, score: u8) -> Self {
        self.preference_scores.insert(staff_id.into(), score);
        self
    }

    /// Whether the professor prefers `staff_id`.
    pub fn is_professor_preferred(&self, staff_id: &str) -> bool {
        self.professor_preferred.contains(staff_id)
    }

    /// Preference score of `staff_id` (0 when unknown).
    pub fn preference_score(&self, staff_id: &str) -> u8 {
        self.preference_scores.get(staff_id).copied().unwrap_or(0)
    }
}
