//! Term storage contract and an in-memory implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::models::{Section, StaffPreference};

/// Read access to a term's sections and staff preference records.
///
/// Implementations own transport concerns (database, HTTP, files). A call
/// either returns the complete list or an error; partial results are not
/// allowed.
pub trait TermStore: Send + Sync {
    /// All sections of the term, with their assignments, professor
    /// preferences and qualification edges.
    fn sections(&self, term_id: &str) -> Result<Vec<Section>, StoreError>;

    /// All staff preference records of the term.
    fn staff_preferences(&self, term_id: &str) -> Result<Vec<StaffPreference>, StoreError>;
}

/// Everything stored for one term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSnapshot {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub staff_preferences: Vec<StaffPreference>,
}

impl TermSnapshot {
    /// Creates a snapshot.
    pub fn new(sections: Vec<Section>, staff_preferences: Vec<StaffPreference>) -> Self {
        Self {
            sections,
            staff_preferences,
        }
    }
}

/// Term store backed by a map of snapshots.
///
/// Used for fixtures and for feeding JSON exports straight into a solve.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    terms: BTreeMap<String, TermSnapshot>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a term.
    pub fn with_term(mut self, term_id: impl Into<String>, snapshot: TermSnapshot) -> Self {
        self.terms.insert(term_id.into(), snapshot);
        self
    }

    /// Loads terms from a JSON object keyed by term id.
    ///
    /// ```
    /// use ta_staffing::assembly::{InMemoryStore, TermStore};
    ///
    /// let store = InMemoryStore::from_json(r#"{
    ///     "2024F": {
    ///         "sections": [{ "id": "CS101-01", "requiredHours": 20 }],
    ///         "staffPreferences": []
    ///     }
    /// }"#).unwrap();
    /// assert_eq!(store.sections("2024F").unwrap().len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let terms: BTreeMap<String, TermSnapshot> =
            serde_json::from_str(json).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(Self { terms })
    }

    /// Number of stored terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    fn term(&self, term_id: &str) -> Result<&TermSnapshot, StoreError> {
        self.terms
            .get(term_id)
            .ok_or_else(|| StoreError::UnknownTerm(term_id.to_string()))
    }
}

impl TermStore for InMemoryStore {
    fn sections(&self, term_id: &str) -> Result<Vec<Section>, StoreError> {
        Ok(self.term(term_id)?.sections.clone())
    }

    fn staff_preferences(&self, term_id: &str) -> Result<Vec<StaffPreference>, StoreError> {
        Ok(self.term(term_id)?.staff_preferences.clone())
    }
}
