//! Candidate ranking rules and rule engine.
//!
//! The greedy strategy fills each section from an ordered candidate list.
//! That order is produced here by composing ranking rules: the first rule
//! decides, later rules only break its ties.
//!
//! # Usage
//!
//! ```
//! use ta_staffing::ranking::{RankingContext, RankingEngine};
//! use ta_staffing::ranking::rules;
//!
//! let engine = RankingEngine::new()
//!     .with_rule(rules::ProfessorPreferred)
//!     .with_rule(rules::StaffPreferenceScore)
//!     .with_rule(rules::SmallestCapacity);
//!
//! let context = RankingContext::for_section("CS101-01");
//! // let order = engine.sort_indices(&candidates, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::RankingContext;
pub use engine::RankingEngine;

use crate::models::StaffMember;
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = placed earlier.
pub type RuleScore = f64;

/// A rule that scores a candidate for the section in `context`.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for staff who should be placed first.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PROF", "PREF").
    fn name(&self) -> &'static str;

    /// Scores a candidate for the section described by `context`.
    fn evaluate(&self, candidate: &StaffMember, context: &RankingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
