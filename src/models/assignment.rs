//! Assignment (solution) model.
//!
//! An [`Assignment`] is one section ↔ staff edge as stored by the
//! surrounding system. [`SolverAssignments`] is what a solver run
//! produces: for every section, the ordered list of staff placed on it.
//! [`Violation`]s describe invariant breaches found by the audit.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{SectionId, StaffId, StaffMember};

/// A stored section ↔ staff edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assigned section.
    pub section_id: SectionId,
    /// Assigned staff member (with hours, so locked hours can be counted).
    pub staff: StaffMember,
    /// Coordinator-pinned; must survive every solver run unchanged.
    #[serde(default)]
    pub locked: bool,
}

impl Assignment {
    /// Creates an unlocked assignment.
    pub fn new(section_id: impl Into<String>, staff: StaffMember) -> Self {
        Self {
            section_id: section_id.into(),
            staff,
            locked: false,
        }
    }

    /// Creates a locked assignment.
    pub fn locked(section_id: impl Into<String>, staff: StaffMember) -> Self {
        Self {
            section_id: section_id.into(),
            staff,
            locked: true,
        }
    }
}

/// Output of a solver run: section → staff placed on it.
///
/// Backed by a `BTreeMap` so iteration order is stable across runs.
/// Within a section, staff appear in the order the strategy added them
/// (locked staff first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverAssignments {
    sections: BTreeMap<SectionId, Vec<StaffId>>,
}

impl SolverAssignments {
    /// Creates an empty assignment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a (possibly empty) entry exists for a section.
    pub fn ensure_section(&mut self, section_id: &str) {
        if !self.sections.contains_key(section_id) {
            self.sections.insert(section_id.to_string(), Vec::new());
        }
    }

    /// Appends a staff member to a section's list.
    pub fn push(&mut self, section_id: &str, staff_id: impl Into<String>) {
        self.sections
            .entry(section_id.to_string())
            .or_default()
            .push(staff_id.into());
    }

    /// Staff placed on a section (empty if the section is unknown).
    pub fn staff_for(&self, section_id: &str) -> &[StaffId] {
        self.sections
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a staff member is placed on a section.
    pub fn contains(&self, section_id: &str, staff_id: &str) -> bool {
        self.staff_for(section_id).iter().any(|s| s == staff_id)
    }

    /// The section a staff member is placed on, if any.
    pub fn section_of(&self, staff_id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(_, staff)| staff.iter().any(|s| s == staff_id))
            .map(|(section, _)| section.as_str())
    }

    /// Iterates sections in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &Vec<StaffId>)> {
        self.sections.iter()
    }

    /// Number of sections with an entry.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of placements across all sections.
    pub fn assignment_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// How many sections each staff member appears in.
    pub fn placements_per_staff(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for staff in self.sections.values() {
            for id in staff {
                *counts.entry(id.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Consumes the map, returning the underlying section → staff lists.
    pub fn into_inner(self) -> BTreeMap<SectionId, Vec<StaffId>> {
        self.sections
    }
}

/// An invariant breach detected in a solver output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (section or staff).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of solver-output violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A staff member is placed on more than one section.
    DuplicateStaff,
    /// A locked staff member is missing from their section.
    LockDropped,
    /// A locked staff member is listed more than once on their section.
    LockDuplicated,
    /// A staff member is placed on a section they are not legal for.
    IllegalCandidate,
    /// The output names a section that is not in the input.
    UnknownSection,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
        severity: i32,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }

    /// Creates a duplicate-staff violation.
    pub fn duplicate_staff(staff_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::DuplicateStaff, staff_id, message, 90)
    }

    /// Creates a dropped-lock violation.
    pub fn lock_dropped(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::LockDropped, section_id, message, 95)
    }

    /// Creates a duplicated-lock violation.
    pub fn lock_duplicated(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::LockDuplicated, section_id, message, 60)
    }

    /// Creates an illegal-candidate violation.
    pub fn illegal_candidate(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::IllegalCandidate, section_id, message, 85)
    }

    /// Creates an unknown-section violation.
    pub fn unknown_section(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::UnknownSection, section_id, message, 70)
    }
}
