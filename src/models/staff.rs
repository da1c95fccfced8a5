//! Staff model.
//!
//! Staff are the teaching assistants (TAs, PLAs, GLAs) that solvers place
//! into sections. Each staff member carries a weekly-hours capacity and,
//! per term, one [`StaffPreference`] record describing which sections they
//! are qualified for and which they would like to work.

use serde::{Deserialize, Serialize};

use super::{SectionId, StaffId};

/// A staff member eligible for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    /// Unique staff identifier.
    pub id: StaffId,
    /// Display name (used as the backtracking candidate sort key).
    pub name: String,
    /// Weekly hours this staff member contributes to a section.
    pub hours: u32,
}

/// How strongly a staff member wants a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceRank {
    /// First choice.
    StronglyPrefer,
    /// Acceptable choice.
    Prefer,
}

impl PreferenceRank {
    /// Numeric score used when ordering candidates (higher = more wanted).
    #[inline]
    pub fn score(self) -> u8 {
        match self {
            PreferenceRank::StronglyPrefer => 2,
            PreferenceRank::Prefer => 1,
        }
    }
}

/// A ranked section preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPreference {
    /// Preferred section.
    pub section_id: SectionId,
    /// Preference strength.
    pub rank: PreferenceRank,
}

/// Day of the week for availability slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

/// A weekly time slot [start, end) in minutes from midnight.
///
/// Only the coverage report reads these; solvers ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    /// Day of the week.
    pub day: Weekday,
    /// Slot start (minutes, inclusive).
    pub start_minute: u16,
    /// Slot end (minutes, exclusive).
    pub end_minute: u16,
}

impl AvailabilitySlot {
    /// Creates a new slot.
    pub fn new(day: Weekday, start_minute: u16, end_minute: u16) -> Self {
        Self {
            day,
            start_minute,
            end_minute,
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }
}

/// Per-term preference record for one staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPreference {
    /// The staff member this record belongs to.
    pub staff: StaffMember,
    /// Sections the staff member is qualified to assist.
    #[serde(default)]
    pub qualified_sections: Vec<SectionId>,
    /// Ranked sections the staff member would like.
    #[serde(default)]
    pub preferred_sections: Vec<SectionPreference>,
    /// `false` when the staff member declared themselves unavailable this term.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Weekly availability slots.
    #[serde(default)]
    pub time_availability: Vec<AvailabilitySlot>,
}

fn default_available() -> bool {
    true
}

impl StaffMember {
    /// Creates a new staff member.
    pub fn new(id: impl Into<String>, name: impl Into<String>, hours: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hours,
        }
    }
}

impl StaffPreference {
    /// Creates an available preference record with no qualifications.
    pub fn new(staff: StaffMember) -> Self {
        Self {
            staff,
            qualified_sections: Vec::new(),
            preferred_sections: Vec::new(),
            available: true,
            time_availability: Vec::new(),
        }
    }

    /// Adds a qualified section.
    pub fn qualified_for(mut self, section_id: impl Into<String>) -> Self {
        self.qualified_sections.push(section_id.into());
        self
    }

    /// Adds a ranked section preference.
    pub fn with_preference(mut self, section_id: impl Into<String>, rank: PreferenceRank) -> Self {
        self.preferred_sections.push(SectionPreference {
            section_id: section_id.into(),
            rank,
        });
        self
    }

    /// Sets the term availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Adds a weekly availability slot.
    pub fn with_slot(mut self, slot: AvailabilitySlot) -> Self {
        self.time_availability.push(slot);
        self
    }

    /// Staff identifier shortcut.
    #[inline]
    pub fn staff_id(&self) -> &str {
        &self.staff.id
    }

    /// Preference score for a section (2 = strongly prefer, 1 = prefer, 0 = none).
    ///
    /// If a section is listed more than once the strongest rank wins.
    pub fn score_for(&self, section_id: &str) -> u8 {
        self.preferred_sections
            .iter()
            .filter(|p| p.section_id == section_id)
            .map(|p| p.rank.score())
            .max()
            .unwrap_or(0)
    }

    /// Whether this staff member is qualified for a section.
    pub fn is_qualified_for(&self, section_id: &str) -> bool {
        self.qualified_sections.iter().any(|s| s == section_id)
    }

    /// Whether the staff member is free during any part of `slot`.
    pub fn is_available_during(&self, slot: &AvailabilitySlot) -> bool {
        self.time_availability.iter().any(|s| s.overlaps(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_builder() {
        let pref = StaffPreference::new(StaffMember::new("s1", "Ada", 10))
            .qualified_for("CS101-01")
            .qualified_for("CS101-02")
            .with_preference("CS101-01", PreferenceRank::StronglyPrefer);

        assert_eq!(pref.staff_id(), "s1");
        assert!(pref.available);
        assert!(pref.is_qualified_for("CS101-02"));
        assert!(!pref.is_qualified_for("CS201-01"));
        assert_eq!(pref.score_for("CS101-01"), 2);
        assert_eq!(pref.score_for("CS101-02"), 0);
    }

    #[test]
    fn test_strongest_rank_wins() {
        let pref = StaffPreference::new(StaffMember::new("s1", "Ada", 10))
            .with_preference("A", PreferenceRank::Prefer)
            .with_preference("A", PreferenceRank::StronglyPrefer);
        assert_eq!(pref.score_for("A"), 2);
    }

    #[test]
    fn test_rank_serialization() {
        let json = serde_json::to_string(&PreferenceRank::StronglyPrefer).unwrap();
        assert_eq!(json, "\"STRONGLY_PREFER\"");
        let rank: PreferenceRank = serde_json::from_str("\"PREFER\"").unwrap();
        assert_eq!(rank, PreferenceRank::Prefer);
    }

    #[test]
    fn test_slot_overlap() {
        let a = AvailabilitySlot::new(Weekday::Mon, 600, 720);
        let b = AvailabilitySlot::new(Weekday::Mon, 700, 800);
        let c = AvailabilitySlot::new(Weekday::Mon, 720, 800);
        let d = AvailabilitySlot::new(Weekday::Tue, 600, 720);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // half-open
        assert!(!a.overlaps(&d));
        assert_eq!(a.duration_minutes(), 120);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"staff": {"id": "s1", "name": "Ada", "hours": 10}}"#;
        let pref: StaffPreference = serde_json::from_str(json).unwrap();
        assert!(pref.available);
        assert!(pref.qualified_sections.is_empty());
        assert!(pref.time_availability.is_empty());
    }
}
