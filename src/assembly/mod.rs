//! Data assembly.
//!
//! Builds the [`SolverData`] snapshot for a term from a [`TermStore`]:
//! every section, plus the staff who are still eligible for placement.
//! A staff member is eligible when they declared themselves available
//! for the term and are not already locked into one of its sections.
//! Locked staff stay visible through the sections' assignments, so
//! their hours still count.

mod store;

pub use store::{InMemoryStore, TermSnapshot, TermStore};

use std::collections::HashSet;

use crate::error::SolverError;
use crate::models::SolverData;
use crate::validation::validate_data;

/// Reads a term from `store` and assembles the solver input.
///
/// Validation findings are logged as warnings; they do not fail the call.
///
/// # Errors
/// [`SolverError::DataAccess`] if either store read fails. No partial
/// snapshot is returned.
pub fn assemble_solver_data<S: TermStore + ?Sized>(
    store: &S,
    term_id: &str,
) -> Result<SolverData, SolverError> {
    let sections = store.sections(term_id)?;
    let preferences = store.staff_preferences(term_id)?;

    let locked: HashSet<String> = sections
        .iter()
        .flat_map(|s| s.locked_assignments())
        .map(|a| a.staff.id.clone())
        .collect();

    let total = preferences.len();
    let staff_preferences: Vec<_> = preferences
        .into_iter()
        .filter(|p| p.available && !locked.contains(p.staff_id()))
        .collect();

    tracing::info!(
        term = term_id,
        sections = sections.len(),
        eligible = staff_preferences.len(),
        excluded = total - staff_preferences.len(),
        "assembled solver data"
    );

    let data = SolverData::new(sections, staff_preferences);
    if let Err(findings) = validate_data(&data) {
        for finding in &findings {
            tracing::warn!(term = term_id, "{finding}");
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::{Section, StaffMember, StaffPreference};

    fn store() -> InMemoryStore {
        InMemoryStore::new().with_term(
            "2024F",
            TermSnapshot::new(
                vec![
                    Section::new("A", 20).with_locked(StaffMember::new("s3", "Cy", 10)),
                    Section::new("B", 10).with_unlocked(StaffMember::new("s1", "Ada", 10)),
                ],
                vec![
                    StaffPreference::new(StaffMember::new("s1", "Ada", 10)).qualified_for("A"),
                    StaffPreference::new(StaffMember::new("s2", "Bob", 10))
                        .qualified_for("A")
                        .with_available(false),
                    StaffPreference::new(StaffMember::new("s3", "Cy", 10)).qualified_for("B"),
                    StaffPreference::new(StaffMember::new("s4", "Di", 5)).qualified_for("B"),
                ],
            ),
        )
    }

    #[test]
    fn test_filters_unavailable_and_locked() {
        let data = assemble_solver_data(&store(), "2024F").unwrap();

        assert_eq!(data.sections.len(), 2);
        let ids: Vec<&str> = data.staff_preferences.iter().map(|p| p.staff_id()).collect();
        // s2 unavailable, s3 locked into A; unlocked s1 stays eligible
        assert_eq!(ids, vec!["s1", "s4"]);
        assert_eq!(data.section("A").unwrap().locked_hours(), 10);
    }

    #[test]
    fn test_unknown_term_is_data_access_error() {
        let err = assemble_solver_data(&store(), "1999S").unwrap_err();
        assert!(matches!(
            err,
            SolverError::DataAccess(StoreError::UnknownTerm(ref t)) if t == "1999S"
        ));
    }

    struct Offline;

    impl TermStore for Offline {
        fn sections(&self, _term_id: &str) -> Result<Vec<Section>, StoreError> {
            Ok(vec![Section::new("A", 10)])
        }

        fn staff_preferences(&self, _term_id: &str) -> Result<Vec<StaffPreference>, StoreError> {
            Err(StoreError::Unreachable("connection refused".into()))
        }
    }

    #[test]
    fn test_store_failure_returns_nothing_partial() {
        let err = assemble_solver_data(&Offline, "2024F").unwrap_err();
        assert!(matches!(err, SolverError::DataAccess(StoreError::Unreachable(_))));
    }

    #[test]
    fn test_trait_object_store() {
        let boxed: Box<dyn TermStore> = Box::new(store());
        let data = assemble_solver_data(boxed.as_ref(), "2024F").unwrap();
        assert_eq!(data.staff_preferences.len(), 2);
    }
}
