//! Rule engine for multi-criteria candidate ordering.
//!
//! Applies rules in sequence: a later rule is consulted only when every
//! earlier rule scores two candidates equally.

use std::sync::Arc;

use super::{rules, RankingContext, RankingRule};
use crate::models::StaffMember;

/// A composable rule engine for candidate ordering.
///
/// # Example
/// ```
/// use ta_staffing::models::StaffMember;
/// use ta_staffing::ranking::{rules, RankingContext, RankingEngine};
///
/// let engine = RankingEngine::new().with_rule(rules::SmallestCapacity);
/// let staff = vec![StaffMember::new("a", "A", 10), StaffMember::new("b", "B", 5)];
/// let refs: Vec<&StaffMember> = staff.iter().collect();
///
/// let order = engine.sort_indices(&refs, &RankingContext::for_section("S"));
/// assert_eq!(order, vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
    epsilon: f64,
}

impl RankingEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The ordering used by the greedy strategy: professor-preferred first,
    /// then by the candidate's own preference, then smallest hours first.
    pub fn greedy_default() -> Self {
        Self::new()
            .with_rule(rules::ProfessorPreferred)
            .with_rule(rules::StaffPreferenceScore)
            .with_rule(rules::SmallestCapacity)
    }

    /// Appends a rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts candidates (highest priority first).
    ///
    /// Returns indices into `candidates`. The sort is stable, so
    /// candidates every rule scores equally keep their input order.
    pub fn sort_indices(
        &self,
        candidates: &[&StaffMember],
        context: &RankingContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b], context));
        indices
    }

    fn compare(
        &self,
        a: &StaffMember,
        b: &StaffMember,
        context: &RankingContext,
    ) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        std::cmp::Ordering::Equal
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
