//! Legality filter.
//!
//! Derives, per section, the staff that may legally be placed on it:
//! qualified for the section AND not on the professor's avoid list.
//! Qualification edges are read from both sides: a staff record's
//! `qualified_sections` and a section's `qualified_staff`.
//! Exclusivity is not enforced here; a staff member is usually legal for
//! several sections at once and the strategies decide where they go.

use std::collections::BTreeMap;

use crate::models::{Section, SectionId, SolverData, StaffId};

/// Per-section legal candidate lists.
///
/// Lists preserve discovery order: staff preference records in input
/// order (each record's qualified sections in listed order), then each
/// section's own `qualified_staff` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalCandidates {
    by_section: BTreeMap<SectionId, Vec<StaffId>>,
}

impl LegalCandidates {
    /// Legal staff for a section (empty if none or unknown).
    pub fn for_section(&self, section_id: &str) -> &[StaffId] {
        self.by_section
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of legal staff for a section.
    pub fn count_for(&self, section_id: &str) -> usize {
        self.for_section(section_id).len()
    }

    /// Whether a staff member is legal for a section.
    pub fn is_legal(&self, section_id: &str, staff_id: &str) -> bool {
        self.for_section(section_id).iter().any(|s| s == staff_id)
    }

    /// Iterates sections that have at least one legal candidate.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &Vec<StaffId>)> {
        self.by_section.iter()
    }
}

/// Computes the legal candidate lists for every section in `data`.
///
/// Pure and deterministic. Qualifications naming a section that is not
/// in `data.sections` are ignored, as are section-side edges naming staff
/// without a preference record (not eligible this run). A staff member
/// qualified twice for the same section is listed once.
pub fn legal_candidates(data: &SolverData) -> LegalCandidates {
    let mut by_section: BTreeMap<SectionId, Vec<StaffId>> = BTreeMap::new();

    for pref in &data.staff_preferences {
        for section_id in &pref.qualified_sections {
            if let Some(section) = data.section(section_id) {
                admit(&mut by_section, section, pref.staff_id());
            }
        }
    }

    for section in &data.sections {
        for staff_id in &section.qualified_staff {
            if data.preference_for(staff_id).is_some() {
                admit(&mut by_section, section, staff_id);
            }
        }
    }

    LegalCandidates { by_section }
}

fn admit(by_section: &mut BTreeMap<SectionId, Vec<StaffId>>, section: &Section, staff_id: &str) {
    if section.avoids(staff_id) {
        return;
    }
    let legal = by_section.entry(section.id.clone()).or_default();
    if !legal.iter().any(|s| s == staff_id) {
        legal.push(staff_id.to_string());
    }
}
