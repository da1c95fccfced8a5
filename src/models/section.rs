//! Section model.
//!
//! A section is a single offering of a course that needs a target number
//! of assistant help-hours per week. It carries its existing assignments
//! (some of which may be locked by a coordinator), the professor's
//! prefer/avoid lists, and the staff qualified to assist it.

use serde::{Deserialize, Serialize};

use super::{Assignment, SectionId, StaffId, StaffMember};

/// A course section to be staffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: SectionId,
    /// Course code (informational).
    #[serde(default)]
    pub course: String,
    /// Target total of assistant hours.
    pub required_hours: u32,
    /// Existing assignments; locked ones survive every solver run.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Professor prefer/avoid lists.
    #[serde(default)]
    pub professor_preference: Option<ProfessorPreference>,
    /// Staff qualified for the section, recorded on the section side.
    /// Merged with each staff record's `qualified_sections` when legal
    /// candidates are derived.
    #[serde(default)]
    pub qualified_staff: Vec<StaffId>,
}

/// The professor's staffing wishes for a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorPreference {
    /// Staff the professor would like on the section.
    #[serde(default)]
    pub preferred_staff: Vec<StaffId>,
    /// Staff the professor refuses; never legal for the section.
    #[serde(default)]
    pub avoided_staff: Vec<StaffId>,
}

impl ProfessorPreference {
    /// Creates an empty preference record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preferred staff member.
    pub fn prefer(mut self, staff_id: impl Into<String>) -> Self {
        self.preferred_staff.push(staff_id.into());
        self
    }

    /// Adds an avoided staff member.
    pub fn avoid(mut self, staff_id: impl Into<String>) -> Self {
        self.avoided_staff.push(staff_id.into());
        self
    }
}

impl Section {
    /// Creates a section with the given hour target.
    pub fn new(id: impl Into<String>, required_hours: u32) -> Self {
        Self {
            id: id.into(),
            course: String::new(),
            required_hours,
            assignments: Vec::new(),
            professor_preference: None,
            qualified_staff: Vec::new(),
        }
    }

    /// Sets the course code.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Adds a coordinator-locked assignment.
    pub fn with_locked(mut self, staff: StaffMember) -> Self {
        let assignment = Assignment::locked(self.id.clone(), staff);
        self.assignments.push(assignment);
        self
    }

    /// Adds an unlocked (previous-run) assignment.
    pub fn with_unlocked(mut self, staff: StaffMember) -> Self {
        let assignment = Assignment::new(self.id.clone(), staff);
        self.assignments.push(assignment);
        self
    }

    /// Sets the professor preference record.
    pub fn with_professor_preference(mut self, preference: ProfessorPreference) -> Self {
        self.professor_preference = Some(preference);
        self
    }

    /// Records a qualification edge.
    pub fn with_qualified(mut self, staff_id: impl Into<String>) -> Self {
        self.qualified_staff.push(staff_id.into());
        self
    }

    /// Locked assignments, in stored order.
    pub fn locked_assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| a.locked)
    }

    /// Total hours already pinned by locked assignments.
    pub fn locked_hours(&self) -> u32 {
        self.locked_assignments()
            .fold(0, |total: u32, a| total.saturating_add(a.staff.hours))
    }

    /// Whether the professor avoids a staff member.
    pub fn avoids(&self, staff_id: &str) -> bool {
        self.professor_preference
            .as_ref()
            .is_some_and(|p| p.avoided_staff.iter().any(|s| s == staff_id))
    }

    /// Whether the professor prefers a staff member.
    pub fn prefers(&self, staff_id: &str) -> bool {
        self.professor_preference
            .as_ref()
            .is_some_and(|p| p.preferred_staff.iter().any(|s| s == staff_id))
    }
}
