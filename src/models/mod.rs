//! Course-staffing domain models.
//!
//! Provides the data types the solvers read and write. Sections and staff
//! preference records are owned by the surrounding system and treated as
//! read-only; [`SolverAssignments`] is the transient output of one run.
//!
//! # Domain Mappings
//!
//! | ta-staffing | Scheduling analogue |
//! |-------------|---------------------|
//! | Section | Task with an hour demand |
//! | StaffMember | Human resource with capacity |
//! | Legal candidate | Eligible resource |
//! | Locked assignment | Frozen assignment |

mod assignment;
mod data;
mod section;
mod staff;

pub use assignment::{Assignment, SolverAssignments, Violation, ViolationType};
pub use data::SolverData;
pub use section::{ProfessorPreference, Section};
pub use staff::{
    AvailabilitySlot, PreferenceRank, SectionPreference, StaffMember, StaffPreference, Weekday,
};

/// Section identifier.
pub type SectionId = String;

/// Staff identifier.
pub type StaffId = String;
