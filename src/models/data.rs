//! Solver input snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Section, StaffMember, StaffPreference};

/// Everything a solver run reads: a term's sections and its eligible staff.
///
/// Treated as an immutable snapshot for the duration of one solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverData {
    /// Sections to staff, in solver order.
    pub sections: Vec<Section>,
    /// Preference records of staff eligible for this run.
    pub staff_preferences: Vec<StaffPreference>,
}

impl SolverData {
    /// Creates a snapshot.
    pub fn new(sections: Vec<Section>, staff_preferences: Vec<StaffPreference>) -> Self {
        Self {
            sections,
            staff_preferences,
        }
    }

    /// Finds a section by ID.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Finds a staff preference record by staff ID.
    pub fn preference_for(&self, staff_id: &str) -> Option<&StaffPreference> {
        self.staff_preferences
            .iter()
            .find(|p| p.staff.id == staff_id)
    }

    /// Staff lookup covering both preference records and locked assignments.
    ///
    /// Locked staff are usually absent from `staff_preferences`, so their
    /// records come from the section assignments.
    pub fn staff_index(&self) -> HashMap<&str, &StaffMember> {
        let mut index: HashMap<&str, &StaffMember> = HashMap::new();
        for section in &self.sections {
            for assignment in &section.assignments {
                index.insert(assignment.staff.id.as_str(), &assignment.staff);
            }
        }
        for pref in &self.staff_preferences {
            index.insert(pref.staff.id.as_str(), &pref.staff);
        }
        index
    }

    /// Whether there is nothing to solve.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
