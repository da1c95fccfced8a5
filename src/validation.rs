//! Input validation for staffing problems.
//!
//! Checks structural integrity of a [`SolverData`] snapshot before solving.
//! Detects:
//! - Duplicate section IDs and duplicate staff preference records
//! - Qualification or preference references to unknown sections
//! - Assignments filed under the wrong section
//! - Staff locked into more than one section
//! - Locked staff still present in the eligible pool
//! - Staff with zero hours capacity
//!
//! None of these stop a solver from running; they point at data that
//! will produce surprising assignments.

use crate::models::SolverData;
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A staff record references a section that doesn't exist.
    InvalidSectionReference,
    /// An assignment's section ID differs from the section holding it.
    InconsistentAssignment,
    /// A staff member is locked into more than one section.
    ConflictingLocks,
    /// A locked staff member also appears in the eligible pool.
    LockedStaffEligible,
    /// A staff member contributes no hours.
    ZeroCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a solver input snapshot.
///
/// Checks:
/// 1. No duplicate section IDs
/// 2. No duplicate staff preference records
/// 3. Qualified and preferred sections exist
/// 4. Every assignment is filed under its own section
/// 5. No staff member is locked into two sections
/// 6. Locked staff are not also in the eligible pool
/// 7. Every eligible staff member has non-zero hours
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_data(data: &SolverData) -> ValidationResult {
    let mut errors = Vec::new();

    let mut section_ids = HashSet::new();
    for section in &data.sections {
        if !section_ids.insert(section.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", section.id),
            ));
        }
    }

    let mut staff_ids = HashSet::new();
    for pref in &data.staff_preferences {
        let staff_id = pref.staff_id();
        if !staff_ids.insert(staff_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff preference record: {staff_id}"),
            ));
        }

        if pref.staff.hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Staff '{staff_id}' has zero hours capacity"),
            ));
        }

        for section_id in &pref.qualified_sections {
            if !section_ids.contains(section_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSectionReference,
                    format!("Staff '{staff_id}' is qualified for unknown section '{section_id}'"),
                ));
            }
        }

        for preferred in &pref.preferred_sections {
            if !section_ids.contains(preferred.section_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSectionReference,
                    format!(
                        "Staff '{staff_id}' prefers unknown section '{}'",
                        preferred.section_id
                    ),
                ));
            }
        }
    }

    // Locks: staff_id -> first section it is locked into
    let mut locked_in: HashMap<&str, &str> = HashMap::new();
    for section in &data.sections {
        for assignment in &section.assignments {
            if assignment.section_id != section.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentAssignment,
                    format!(
                        "Section '{}' holds an assignment for section '{}'",
                        section.id, assignment.section_id
                    ),
                ));
            }

            if !assignment.locked {
                continue;
            }
            let staff_id = assignment.staff.id.as_str();
            match locked_in.get(staff_id) {
                Some(&other) if other != section.id => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ConflictingLocks,
                        format!(
                            "Staff '{staff_id}' is locked into both '{other}' and '{}'",
                            section.id
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    locked_in.insert(staff_id, section.id.as_str());
                }
            }
        }
    }

    for pref in &data.staff_preferences {
        if let Some(section_id) = locked_in.get(pref.staff_id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LockedStaffEligible,
                format!(
                    "Staff '{}' is locked into '{section_id}' but still in the eligible pool",
                    pref.staff_id()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
