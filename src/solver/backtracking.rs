//! Backtracking assignment strategy.
//!
//! Searches for an assignment in which every section's staff hours fall
//! inside `[required - short, required + over]` and no staff member is
//! used twice.
//!
//! # Algorithm
//!
//! Sections are visited in input order. For each section the legal
//! candidates are sorted by name and a [`SubsetCursor`] walks their
//! non-empty subsets. The first subset that avoids staff committed to earlier
//! sections and whose hours (plus locked hours) land in the band is
//! committed, and the search moves to the next section. When a section
//! runs out of subsets its cursor is rewound and the search steps back
//! to the previous section, which continues from its next subset.
//!
//! The search is a loop over an explicit stack of section frames, so
//! depth is bounded by the heap, not the call stack.
//!
//! # Scalability
//!
//! Worst case is exponential: a section with `n` candidates has `2^n`
//! subsets, and failed sections multiply across the stack. This is only
//! practical because candidate lists per section are small. Set
//! [`SolverConfig::max_explored`](crate::config::SolverConfig) to bound a
//! run; hitting the bound yields [`SolveOutcome::BudgetExhausted`], which
//! is distinct from [`SolveOutcome::NoSolution`].

use std::collections::HashSet;

use super::{AssignmentStrategy, SolveOutcome, SubsetCursor};
use crate::config::{MarginOfError, SolverConfig};
use crate::legality::legal_candidates;
use crate::models::{Section, SolverAssignments, SolverData, StaffMember};

/// Candidate counts above this are logged as a search-cost warning.
const LARGE_CANDIDATE_LIST: usize = 20;

/// Exhaustive depth-first strategy with an hour tolerance band.
#[derive(Debug, Clone)]
pub struct Backtracking {
    margin: MarginOfError,
    max_explored: Option<u64>,
}

/// Per-section search state.
struct SectionFrame<'a> {
    section: &'a Section,
    /// Legal, unlocked candidates sorted by name.
    candidates: Vec<&'a StaffMember>,
    locked_hours: u32,
    cursor: SubsetCursor,
    committed: Option<Vec<usize>>,
}

/// Mutable state of one search.
struct SearchContext<'a> {
    frames: Vec<SectionFrame<'a>>,
    /// Staff currently committed by some frame, or locked anywhere.
    used: HashSet<&'a str>,
    explored: u64,
}

enum Step {
    Commit(Vec<usize>),
    Exhausted,
    OutOfBudget,
}

impl Backtracking {
    /// Creates the strategy with the given tolerance and no budget.
    pub fn new(margin: MarginOfError) -> Self {
        Self {
            margin,
            max_explored: None,
        }
    }

    /// Creates the strategy from solver configuration.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            margin: config.margin,
            max_explored: config.max_explored,
        }
    }

    /// Caps the number of candidate subsets examined.
    pub fn with_max_explored(mut self, max_explored: u64) -> Self {
        self.max_explored = Some(max_explored);
        self
    }

    /// The hour tolerance in use.
    pub fn margin(&self) -> MarginOfError {
        self.margin
    }

    /// Runs the search.
    pub fn search(&self, data: &SolverData) -> SolveOutcome {
        let mut context = self.prepare(data);

        tracing::info!(
            sections = context.frames.len(),
            short_moe = self.margin.short_hours,
            over_moe = self.margin.over_hours,
            max_explored = ?self.max_explored,
            "starting backtracking search"
        );

        let mut depth = 0;
        loop {
            if depth == context.frames.len() {
                let assignments = Self::collect(&context.frames);
                tracing::info!(
                    explored = context.explored,
                    placements = assignments.assignment_count(),
                    "backtracking search found an assignment"
                );
                return SolveOutcome::Found(assignments);
            }

            let frame = &mut context.frames[depth];
            if let Some(previous) = frame.committed.take() {
                for &i in &previous {
                    context.used.remove(frame.candidates[i].id.as_str());
                }
            }

            match self.next_valid(frame, &context.used, &mut context.explored) {
                Step::Commit(subset) => {
                    for &i in &subset {
                        let staff: &StaffMember = frame.candidates[i];
                        context.used.insert(staff.id.as_str());
                    }
                    tracing::debug!(
                        section = %frame.section.id,
                        staff = subset.len(),
                        depth,
                        "committed candidate subset"
                    );
                    frame.committed = Some(subset);
                    depth += 1;
                }
                Step::Exhausted => {
                    frame.cursor.reset();
                    if depth == 0 {
                        tracing::info!(
                            explored = context.explored,
                            "backtracking search found no assignment"
                        );
                        return SolveOutcome::NoSolution {
                            explored: context.explored,
                        };
                    }
                    tracing::debug!(section = %frame.section.id, depth, "backtracking");
                    depth -= 1;
                }
                Step::OutOfBudget => {
                    tracing::info!(
                        explored = context.explored,
                        "backtracking search stopped at exploration budget"
                    );
                    return SolveOutcome::BudgetExhausted {
                        explored: context.explored,
                    };
                }
            }
        }
    }

    fn prepare<'a>(&self, data: &'a SolverData) -> SearchContext<'a> {
        let legal = legal_candidates(data);
        let index = data.staff_index();

        let used: HashSet<&'a str> = data
            .sections
            .iter()
            .flat_map(|s| s.locked_assignments())
            .map(|a| a.staff.id.as_str())
            .collect();

        let frames = data
            .sections
            .iter()
            .map(|section| {
                let mut candidates: Vec<&'a StaffMember> = legal
                    .for_section(&section.id)
                    .iter()
                    .filter(|id| !used.contains(id.as_str()))
                    .filter_map(|id| index.get(id.as_str()).copied())
                    .collect();
                candidates.sort_by(|a, b| a.name.cmp(&b.name));

                if candidates.len() > LARGE_CANDIDATE_LIST {
                    tracing::warn!(
                        section = %section.id,
                        candidates = candidates.len(),
                        "large candidate list; search cost grows as 2^n"
                    );
                }

                SectionFrame {
                    section,
                    cursor: SubsetCursor::new(candidates.len()),
                    locked_hours: distinct_locked_hours(section),
                    candidates,
                    committed: None,
                }
            })
            .collect();

        SearchContext {
            frames,
            used,
            explored: 0,
        }
    }

    /// Advances a frame's cursor to the next subset that fits the band and
    /// avoids staff already in use.
    fn next_valid(
        &self,
        frame: &mut SectionFrame<'_>,
        used: &HashSet<&str>,
        explored: &mut u64,
    ) -> Step {
        let required = frame.section.required_hours;

        loop {
            if self.max_explored.is_some_and(|max| *explored >= max) {
                return Step::OutOfBudget;
            }
            let Some(subset) = frame.cursor.next() else {
                return Step::Exhausted;
            };
            *explored += 1;

            if subset
                .iter()
                .any(|&i| used.contains(frame.candidates[i].id.as_str()))
            {
                continue;
            }

            let hours = subset
                .iter()
                .fold(frame.locked_hours, |total, &i| {
                    total.saturating_add(frame.candidates[i].hours)
                });
            if self.margin.accepts(required, hours) {
                return Step::Commit(subset);
            }
        }
    }

    fn collect(frames: &[SectionFrame<'_>]) -> SolverAssignments {
        let mut assignments = SolverAssignments::new();
        for frame in frames {
            let section_id = &frame.section.id;
            assignments.ensure_section(section_id);
            for locked in frame.section.locked_assignments() {
                if !assignments.contains(section_id, &locked.staff.id) {
                    assignments.push(section_id, locked.staff.id.clone());
                }
            }
            for &i in frame.committed.iter().flatten() {
                assignments.push(section_id, frame.candidates[i].id.clone());
            }
        }
        assignments
    }
}

/// Locked hours counting each locked staff member once.
fn distinct_locked_hours(section: &Section) -> u32 {
    let mut seen = HashSet::new();
    section
        .locked_assignments()
        .filter(|a| seen.insert(a.staff.id.as_str()))
        .fold(0, |total: u32, a| total.saturating_add(a.staff.hours))
}

impl Default for Backtracking {
    fn default() -> Self {
        Self::new(MarginOfError::default())
    }
}

impl AssignmentStrategy for Backtracking {
    fn name(&self) -> &str {
        "backTracking"
    }

    fn solve(&self, data: &SolverData) -> SolveOutcome {
        self.search(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfessorPreference, StaffPreference};

    fn staff(id: &str, name: &str, hours: u32) -> StaffPreference {
        StaffPreference::new(StaffMember::new(id, name, hours))
    }

    fn ids(list: &[String]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_single_candidate_inside_band() {
        // Band for 30h with 10/10 margin is [20, 40]; 25 fits.
        let data = SolverData::new(
            vec![Section::new("A", 30)],
            vec![staff("s1", "Ada", 25).qualified_for("A")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["s1"]);
    }

    #[test]
    fn test_subset_outside_band_rejected() {
        // Band for 30h with 2/2 margin is [28, 32]; 25 alone does not fit.
        let data = SolverData::new(
            vec![Section::new("A", 30)],
            vec![staff("s1", "Ada", 25).qualified_for("A")],
        );
        let outcome = Backtracking::new(MarginOfError::new(2, 2)).solve(&data);

        assert!(matches!(outcome, SolveOutcome::NoSolution { .. }));
    }

    #[test]
    fn test_accepts_inside_band_not_outside() {
        // A predicate that accepted subsets OUTSIDE the band would pick Ada
        // alone here (15h is outside [20, 40]). Inside-band is intended.
        let data = SolverData::new(
            vec![Section::new("A", 30)],
            vec![
                staff("s1", "Ada", 15).qualified_for("A"),
                staff("s2", "Bob", 15).qualified_for("A"),
            ],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["s1", "s2"]);
    }

    #[test]
    fn test_candidates_tried_in_name_order() {
        // Both alone fit [10, 30]; the alphabetically first name is position 0.
        let data = SolverData::new(
            vec![Section::new("A", 20)],
            vec![
                staff("z", "Zoe", 20).qualified_for("A"),
                staff("a", "Amy", 20).qualified_for("A"),
            ],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["a"]);
    }

    #[test]
    fn test_shared_single_candidate_has_no_solution() {
        let data = SolverData::new(
            vec![Section::new("A", 20), Section::new("B", 20)],
            vec![staff("s1", "Ada", 20).qualified_for("A").qualified_for("B")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert!(matches!(outcome, SolveOutcome::NoSolution { .. }));
    }

    #[test]
    fn test_backtracks_into_earlier_section() {
        // A tries Amy first (name order), which starves B. The search must
        // step back and give A Bob instead.
        let data = SolverData::new(
            vec![Section::new("A", 20), Section::new("B", 20)],
            vec![
                staff("amy", "Amy", 20).qualified_for("A").qualified_for("B"),
                staff("bob", "Bob", 20).qualified_for("A"),
            ],
        );
        let outcome = Backtracking::default().solve(&data);
        let out = outcome.assignments().unwrap();

        assert_eq!(ids(out.staff_for("A")), ["bob"]);
        assert_eq!(ids(out.staff_for("B")), ["amy"]);
    }

    #[test]
    fn test_small_section_gets_staff() {
        // 0h lies inside [0, 20], but the empty subset is never a candidate.
        let data = SolverData::new(
            vec![Section::new("A", 10)],
            vec![staff("s1", "Ada", 10).qualified_for("A")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["s1"]);
    }

    #[test]
    fn test_locked_hours_below_band_still_take_a_candidate() {
        // 5 locked hours are below [10, 30]; Ada brings the section to 10.
        let data = SolverData::new(
            vec![Section::new("A", 20).with_locked(StaffMember::new("lock", "Lee", 5))],
            vec![
                staff("s1", "Ada", 5).qualified_for("A"),
                staff("s2", "Bob", 10).qualified_for("A"),
            ],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["lock", "s1"]);
    }

    #[test]
    fn test_locked_hours_alone_are_not_a_commitment() {
        // 20 locked hours fit [10, 30], but every section commits at least
        // one candidate, and 20 + 20 overshoots.
        let data = SolverData::new(
            vec![Section::new("A", 20).with_locked(StaffMember::new("lock", "Lee", 20))],
            vec![staff("s1", "Ada", 20).qualified_for("A")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(outcome, SolveOutcome::NoSolution { explored: 1 });
    }

    #[test]
    fn test_huge_capacities_do_not_overflow() {
        let data = SolverData::new(
            vec![Section::new("A", u32::MAX)
                .with_locked(StaffMember::new("lock", "Lee", u32::MAX))],
            vec![staff("s1", "Ada", u32::MAX).qualified_for("A")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["lock", "s1"]);
    }

    #[test]
    fn test_locked_hours_combine_with_subset() {
        let data = SolverData::new(
            vec![Section::new("A", 40).with_locked(StaffMember::new("lock", "Lee", 15))],
            vec![staff("s1", "Ada", 20).qualified_for("A")],
        );
        let outcome = Backtracking::new(MarginOfError::new(5, 5)).solve(&data);

        assert_eq!(ids(outcome.assignments().unwrap().staff_for("A")), ["lock", "s1"]);
    }

    #[test]
    fn test_locked_staff_not_offered_elsewhere() {
        // Ada sorts first for B, but she is locked into A.
        let data = SolverData::new(
            vec![
                Section::new("A", 30).with_locked(StaffMember::new("s1", "Ada", 20)),
                Section::new("B", 20),
            ],
            vec![
                staff("s1", "Ada", 20).qualified_for("B"),
                staff("bob", "Bob", 5).qualified_for("A"),
                staff("carl", "Carl", 20).qualified_for("B"),
            ],
        );
        let outcome = Backtracking::default().solve(&data);
        let out = outcome.assignments().unwrap();

        assert_eq!(ids(out.staff_for("A")), ["s1", "bob"]);
        assert_eq!(ids(out.staff_for("B")), ["carl"]);
    }

    #[test]
    fn test_avoided_staff_excluded() {
        let data = SolverData::new(
            vec![Section::new("A", 20)
                .with_professor_preference(ProfessorPreference::new().avoid("s1"))],
            vec![staff("s1", "Ada", 20).qualified_for("A")],
        );
        let outcome = Backtracking::default().solve(&data);

        assert!(matches!(outcome, SolveOutcome::NoSolution { .. }));
    }

    #[test]
    fn test_budget_exhausted_is_distinct() {
        let prefs: Vec<StaffPreference> = (0..12)
            .map(|i| staff(&format!("s{i}"), &format!("N{i:02}"), 1).qualified_for("A"))
            .collect();
        // 12 one-hour staff cannot reach [90, 110]; full search is 4095 subsets.
        let data = SolverData::new(vec![Section::new("A", 100)], prefs);

        let bounded = Backtracking::default().with_max_explored(100).solve(&data);
        assert_eq!(bounded, SolveOutcome::BudgetExhausted { explored: 100 });

        let unbounded = Backtracking::default().solve(&data);
        assert_eq!(unbounded, SolveOutcome::NoSolution { explored: 4095 });
    }

    #[test]
    fn test_empty_input_is_found() {
        let outcome = Backtracking::default().solve(&SolverData::default());
        assert_eq!(outcome, SolveOutcome::Found(SolverAssignments::new()));
    }

    #[test]
    fn test_many_sections_do_not_grow_call_stack() {
        let sections: Vec<Section> = (0..2_000)
            .map(|i| Section::new(format!("S{i:04}"), 20))
            .collect();
        let prefs: Vec<StaffPreference> = (0..2_000)
            .map(|i| {
                staff(&format!("t{i}"), &format!("T{i:04}"), 10).qualified_for(format!("S{i:04}"))
            })
            .collect();
        let data = SolverData::new(sections, prefs);

        let outcome = Backtracking::default().solve(&data);
        let out = outcome.assignments().unwrap();
        assert_eq!(out.assignment_count(), 2_000);
        assert_eq!(ids(out.staff_for("S0042")), ["t42"]);
    }

    #[test]
    fn test_from_config() {
        let config = SolverConfig::default()
            .with_margin(MarginOfError::new(1, 2))
            .with_max_explored(9);
        let strategy = Backtracking::from_config(&config);
        assert_eq!(strategy.margin(), MarginOfError::new(1, 2));
        assert_eq!(strategy.name(), "backTracking");
    }
}
