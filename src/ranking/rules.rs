//! Built-in ranking rules.
//!
//! All rules return lower scores for candidates that should be placed first.

use super::{RankingContext, RankingRule, RuleScore};
use crate::models::StaffMember;

/// Professor-preferred staff first.
#[derive(Debug, Clone, Copy)]
pub struct ProfessorPreferred;

impl RankingRule for ProfessorPreferred {
    fn name(&self) -> &'static str {
        "PROF"
    }

    fn evaluate(&self, candidate: &StaffMember, context: &RankingContext) -> RuleScore {
        if context.is_professor_preferred(&candidate.id) {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Professor Preferred"
    }
}

/// Staff who ranked the section higher go first (strongly prefer > prefer > none).
#[derive(Debug, Clone, Copy)]
pub struct StaffPreferenceScore;

impl RankingRule for StaffPreferenceScore {
    fn name(&self) -> &'static str {
        "PREF"
    }

    fn evaluate(&self, candidate: &StaffMember, context: &RankingContext) -> RuleScore {
        -(context.preference_score(&candidate.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Staff Preference Score"
    }
}

/// Smallest hours capacity first.
///
/// Filling with small contributors first keeps the overshoot past the
/// hour target small.
#[derive(Debug, Clone, Copy)]
pub struct SmallestCapacity;

impl RankingRule for SmallestCapacity {
    fn name(&self) -> &'static str {
        "CAP"
    }

    fn evaluate(&self, candidate: &StaffMember, _context: &RankingContext) -> RuleScore {
        candidate.hours as f64
    }

    fn description(&self) -> &'static str {
        "Smallest Capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_preferred() {
        let ctx = RankingContext::for_section("A").with_professor_preferred("p");
        let p = StaffMember::new("p", "P", 10);
        let q = StaffMember::new("q", "Q", 10);
        assert!(ProfessorPreferred.evaluate(&p, &ctx) < ProfessorPreferred.evaluate(&q, &ctx));
    }

    #[test]
    fn test_staff_preference_score() {
        let ctx = RankingContext::for_section("A")
            .with_preference_score("strong", 2)
            .with_preference_score("mild", 1);
        let strong = StaffMember::new("strong", "S", 10);
        let mild = StaffMember::new("mild", "M", 10);
        let none = StaffMember::new("none", "N", 10);
        assert!(StaffPreferenceScore.evaluate(&strong, &ctx) < StaffPreferenceScore.evaluate(&mild, &ctx));
        assert!(StaffPreferenceScore.evaluate(&mild, &ctx) < StaffPreferenceScore.evaluate(&none, &ctx));
    }

    #[test]
    fn test_smallest_capacity() {
        let ctx = RankingContext::for_section("A");
        let small = StaffMember::new("s", "S", 5);
        let large = StaffMember::new("l", "L", 20);
        assert!(SmallestCapacity.evaluate(&small, &ctx) < SmallestCapacity.evaluate(&large, &ctx));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ProfessorPreferred.description(), "Professor Preferred");
        assert_eq!(SmallestCapacity.name(), "CAP");
    }
}
