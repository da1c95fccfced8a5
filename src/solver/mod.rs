//! Assignment strategies and the strategy dispatcher.
//!
//! Two strategies place staff into sections from the same input shape:
//!
//! | Strategy | Key | Approach | Hours guarantee |
//! |---|---|---|---|
//! | [`Greedy`] | `"greedy"` | one pass, most-constrained section first | meets target or runs out of candidates |
//! | [`Backtracking`] | `"backTracking"` | exhaustive depth-first subset search | every section inside the margin band |
//!
//! Both strategies honour the same invariants: a staff member appears in
//! at most one section, locked assignments are kept verbatim and count
//! toward hours, and only legal candidates are ever placed.
//!
//! # Example
//! ```
//! use ta_staffing::config::SolverConfig;
//! use ta_staffing::models::{Section, SolverData, StaffMember, StaffPreference};
//! use ta_staffing::solver::{solve_assignments, StrategyKey};
//!
//! let data = SolverData::new(
//!     vec![Section::new("CS101-01", 20)],
//!     vec![
//!         StaffPreference::new(StaffMember::new("s1", "Ada", 10)).qualified_for("CS101-01"),
//!         StaffPreference::new(StaffMember::new("s2", "Bob", 10)).qualified_for("CS101-01"),
//!     ],
//! );
//!
//! let outcome = solve_assignments(StrategyKey::Greedy, &data, &SolverConfig::default());
//! let assignments = outcome.assignments().unwrap();
//! assert_eq!(assignments.staff_for("CS101-01").len(), 2);
//! ```

mod backtracking;
mod greedy;
mod registry;
mod subsets;

pub use backtracking::Backtracking;
pub use greedy::Greedy;
pub use registry::{solve_assignments, solve_assignments_named, StrategyDescriptor, StrategyKey};
pub use subsets::SubsetCursor;

use crate::models::{SolverAssignments, SolverData};

/// Result of one solver run.
///
/// "Nothing found" is an ordinary outcome, not an error: callers present
/// it as "relax constraints or add staff".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every section was processed; the map holds the placements.
    Found(SolverAssignments),
    /// The search space was exhausted without a satisfying assignment.
    NoSolution {
        /// Candidate subsets examined.
        explored: u64,
    },
    /// The exploration budget ran out before the search finished.
    /// A solution may still exist.
    BudgetExhausted {
        /// Candidate subsets examined.
        explored: u64,
    },
}

impl SolveOutcome {
    /// Whether an assignment was produced.
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }

    /// The assignment, if one was produced.
    pub fn assignments(&self) -> Option<&SolverAssignments> {
        match self {
            SolveOutcome::Found(assignments) => Some(assignments),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the assignment if one was produced.
    pub fn into_assignments(self) -> Option<SolverAssignments> {
        match self {
            SolveOutcome::Found(assignments) => Some(assignments),
            _ => None,
        }
    }
}

/// Trait for assignment strategies.
///
/// Strategies are purely algorithmic: no I/O, no persistence, no shared
/// state between calls. Each call builds its own working maps.
pub trait AssignmentStrategy: Send + Sync {
    /// Registry key of this strategy.
    fn name(&self) -> &str;

    /// Places staff into the sections of `data`.
    fn solve(&self, data: &SolverData) -> SolveOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarginOfError, SolverConfig};
    use crate::legality::legal_candidates;
    use crate::models::{
        PreferenceRank, ProfessorPreference, Section, StaffMember, StaffPreference,
    };
    use crate::report::audit;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Builds a random term: a handful of sections, some locks, avoid lists,
    /// and staff with random qualifications and preferences.
    fn random_term(rng: &mut SmallRng) -> SolverData {
        let n_sections = rng.random_range(1..=5);
        let n_staff = rng.random_range(1..=9);
        let section_ids: Vec<String> = (0..n_sections).map(|i| format!("S{i}")).collect();

        let mut staff: Vec<StaffMember> = (0..n_staff)
            .map(|i| StaffMember::new(format!("t{i}"), format!("Staff {i}"), rng.random_range(3..=15)))
            .collect();

        let mut sections: Vec<Section> = section_ids
            .iter()
            .map(|id| Section::new(id.clone(), rng.random_range(10..=30)))
            .collect();

        // Lock the first staff member into a random section half the time.
        if rng.random_bool(0.5) {
            let locked = staff.remove(0);
            let idx = rng.random_range(0..sections.len());
            sections[idx] = sections[idx].clone().with_locked(locked);
        }

        for section in &mut sections {
            if rng.random_bool(0.3) && !staff.is_empty() {
                let avoided = &staff[rng.random_range(0..staff.len())];
                let prof = ProfessorPreference::new().avoid(avoided.id.clone());
                section.professor_preference = Some(prof);
            }
        }

        let preferences = staff
            .into_iter()
            .map(|member| {
                let mut pref = StaffPreference::new(member);
                for id in &section_ids {
                    if rng.random_bool(0.5) {
                        pref = pref.qualified_for(id.clone());
                    }
                    if rng.random_bool(0.2) {
                        pref = pref.with_preference(id.clone(), PreferenceRank::Prefer);
                    }
                }
                pref
            })
            .collect();

        SolverData::new(sections, preferences)
    }

    fn run_all(data: &SolverData) -> Vec<SolveOutcome> {
        let config = SolverConfig::default().with_max_explored(20_000);
        StrategyKey::ALL
            .iter()
            .map(|&key| solve_assignments(key, data, &config))
            .collect()
    }

    #[test]
    fn test_invariants_hold_on_random_terms() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let data = random_term(&mut rng);
            for outcome in run_all(&data) {
                if let Some(assignments) = outcome.assignments() {
                    let violations = audit(&data, assignments);
                    assert!(violations.is_empty(), "violations: {violations:?}");
                }
            }
        }
    }

    #[test]
    fn test_backtracking_solutions_inside_band() {
        let mut rng = SmallRng::seed_from_u64(7);
        let margin = MarginOfError::default();
        let strategy = Backtracking::new(margin).with_max_explored(20_000);
        let index_hours = |data: &SolverData, id: &str| {
            data.staff_index().get(id).map(|s| s.hours).unwrap_or(0)
        };

        for _ in 0..200 {
            let data = random_term(&mut rng);
            if let SolveOutcome::Found(assignments) = strategy.solve(&data) {
                for section in &data.sections {
                    let hours: u32 = assignments
                        .staff_for(&section.id)
                        .iter()
                        .map(|id| index_hours(&data, id))
                        .sum();
                    assert!(
                        margin.accepts(section.required_hours, hours),
                        "section {} has {hours}h for target {}",
                        section.id,
                        section.required_hours
                    );
                }
            }
        }
    }

    #[test]
    fn test_greedy_never_adds_past_target() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..200 {
            let data = random_term(&mut rng);
            let index = data.staff_index();
            let assignments = Greedy::new().assign(&data);
            let legal = legal_candidates(&data);

            for section in &data.sections {
                let placed = assignments.staff_for(&section.id);
                let locked = section.locked_assignments().count();
                let mut running = section.locked_hours();
                // Every non-locked placement happened while below target.
                for id in &placed[locked..] {
                    assert!(running < section.required_hours);
                    running += index[id.as_str()].hours;
                }
                // Below target only when no legal, unplaced candidate is left.
                if running < section.required_hours {
                    let leftover = legal
                        .for_section(&section.id)
                        .iter()
                        .any(|id| assignments.section_of(id).is_none());
                    assert!(!leftover, "section {} left short with candidates", section.id);
                }
            }
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..50 {
            let data = random_term(&mut rng);
            assert_eq!(run_all(&data), run_all(&data));
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let found = SolveOutcome::Found(SolverAssignments::new());
        assert!(found.is_found());
        assert!(found.assignments().is_some());

        let none = SolveOutcome::NoSolution { explored: 3 };
        assert!(!none.is_found());
        assert!(none.clone().into_assignments().is_none());
        assert_ne!(none, SolveOutcome::BudgetExhausted { explored: 3 });
    }
}
