//! Staffing quality report and solution audit.
//!
//! Computes per-section hour coverage from a solver output and its input
//! snapshot, and checks the output against the placement invariants.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Shortfall | max(0, required - assigned) |
//! | Overshoot | max(0, assigned - required) |
//! | Fully-staffed rate | Fraction of sections with assigned >= required |
//! | Within band | assigned inside [required - short, required + over] |

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::MarginOfError;
use crate::legality::legal_candidates;
use crate::models::{
    AvailabilitySlot, SectionId, SolverAssignments, SolverData, StaffId, Violation,
};

/// Hour coverage of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStaffing {
    /// Section identifier.
    pub section_id: SectionId,
    /// Target hours.
    pub required_hours: u32,
    /// Sum of hours of the staff placed on the section.
    pub assigned_hours: u32,
    /// Number of staff placed on the section.
    pub staff_count: usize,
}

impl SectionStaffing {
    /// Hours still missing.
    pub fn shortfall(&self) -> u32 {
        self.required_hours.saturating_sub(self.assigned_hours)
    }

    /// Hours beyond the target.
    pub fn overshoot(&self) -> u32 {
        self.assigned_hours.saturating_sub(self.required_hours)
    }

    /// Whether the target is met or exceeded.
    pub fn is_met(&self) -> bool {
        self.assigned_hours >= self.required_hours
    }

    /// Whether assigned hours fall inside the margin band.
    pub fn within_band(&self, margin: &MarginOfError) -> bool {
        margin.accepts(self.required_hours, self.assigned_hours)
    }
}

/// Per-section staffing summary of a solver output.
#[derive(Debug, Clone)]
pub struct StaffingReport {
    /// One entry per input section, in input order.
    pub sections: Vec<SectionStaffing>,
}

impl StaffingReport {
    /// Computes the report from an input snapshot and a solver output.
    ///
    /// Placements naming staff that appear nowhere in `data` contribute
    /// zero hours but still count toward `staff_count`.
    pub fn calculate(data: &SolverData, assignments: &SolverAssignments) -> Self {
        let index = data.staff_index();
        let sections = data
            .sections
            .iter()
            .map(|section| {
                let placed = assignments.staff_for(&section.id);
                let assigned_hours = placed
                    .iter()
                    .filter_map(|id| index.get(id.as_str()))
                    .fold(0, |total: u32, staff| total.saturating_add(staff.hours));
                SectionStaffing {
                    section_id: section.id.clone(),
                    required_hours: section.required_hours,
                    assigned_hours,
                    staff_count: placed.len(),
                }
            })
            .collect();

        Self { sections }
    }

    /// Looks up a section's entry.
    pub fn section(&self, section_id: &str) -> Option<&SectionStaffing> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    /// Sections whose target was not reached.
    pub fn under_provisioned(&self) -> Vec<&SectionStaffing> {
        self.sections.iter().filter(|s| !s.is_met()).collect()
    }

    /// Fraction of sections meeting their target (1.0 when there are none).
    pub fn fully_staffed_rate(&self) -> f64 {
        if self.sections.is_empty() {
            return 1.0;
        }
        let met = self.sections.iter().filter(|s| s.is_met()).count();
        met as f64 / self.sections.len() as f64
    }

    /// Total hours placed across all sections.
    pub fn total_assigned_hours(&self) -> u32 {
        self.sections
            .iter()
            .fold(0, |total: u32, s| total.saturating_add(s.assigned_hours))
    }

    /// Total hours requested across all sections.
    pub fn total_required_hours(&self) -> u32 {
        self.sections
            .iter()
            .fold(0, |total: u32, s| total.saturating_add(s.required_hours))
    }

    /// Whether every section lands inside the margin band.
    pub fn all_within_band(&self, margin: &MarginOfError) -> bool {
        self.sections.iter().all(|s| s.within_band(margin))
    }
}

/// Checks a solver output against the placement invariants.
///
/// Reports, in this order:
/// - output sections absent from the input
/// - locked staff missing from, or repeated within, their section
/// - unlocked placements that are not legal candidates
/// - staff placed on more sections than they are locked into (at least one)
pub fn audit(data: &SolverData, assignments: &SolverAssignments) -> Vec<Violation> {
    let mut violations = Vec::new();
    let legal = legal_candidates(data);

    for (section_id, _) in assignments.iter() {
        if data.section(section_id).is_none() {
            violations.push(Violation::unknown_section(
                section_id.clone(),
                format!("Section '{section_id}' is not part of the input"),
            ));
        }
    }

    let mut locked_sections: HashMap<&str, usize> = HashMap::new();
    for section in &data.sections {
        let placed = assignments.staff_for(&section.id);
        let mut seen: HashSet<&str> = HashSet::new();
        for locked in section.locked_assignments() {
            let staff_id = locked.staff.id.as_str();
            if !seen.insert(staff_id) {
                continue;
            }
            *locked_sections.entry(staff_id).or_insert(0) += 1;

            match placed.iter().filter(|s| *s == staff_id).count() {
                0 => violations.push(Violation::lock_dropped(
                    section.id.clone(),
                    format!("Locked staff '{staff_id}' missing from section '{}'", section.id),
                )),
                1 => {}
                n => violations.push(Violation::lock_duplicated(
                    section.id.clone(),
                    format!("Locked staff '{staff_id}' listed {n} times on '{}'", section.id),
                )),
            }
        }

        for staff_id in placed {
            if seen.contains(staff_id.as_str()) {
                continue;
            }
            if !legal.is_legal(&section.id, staff_id) {
                violations.push(Violation::illegal_candidate(
                    section.id.clone(),
                    format!("Staff '{staff_id}' is not a legal candidate for '{}'", section.id),
                ));
            }
        }
    }

    let mut counts: Vec<(&str, usize)> = assignments.placements_per_staff().into_iter().collect();
    counts.sort_unstable();
    for (staff_id, count) in counts {
        let allowed = locked_sections.get(staff_id).copied().unwrap_or(0).max(1);
        if count > allowed {
            violations.push(Violation::duplicate_staff(
                staff_id,
                format!("Staff '{staff_id}' placed {count} times"),
            ));
        }
    }

    violations
}

/// Weekly coverage of one section: for every availability slot declared
/// by its assigned staff, the staff free during that slot.
///
/// Staff without a preference record (usually locked staff) contribute no
/// slots.
pub fn coverage_by_slot(
    data: &SolverData,
    assignments: &SolverAssignments,
    section_id: &str,
) -> BTreeMap<AvailabilitySlot, Vec<StaffId>> {
    let mut coverage: BTreeMap<AvailabilitySlot, Vec<StaffId>> = BTreeMap::new();
    for staff_id in assignments.staff_for(section_id) {
        let Some(pref) = data.preference_for(staff_id) else {
            continue;
        };
        for slot in &pref.time_availability {
            let staff = coverage.entry(*slot).or_default();
            if !staff.contains(staff_id) {
                staff.push(staff_id.clone());
            }
        }
    }
    coverage
}
