//! Greedy assignment strategy.
//!
//! # Algorithm
//!
//! 1. Seed every section with its locked staff; those staff are consumed
//!    and their hours count toward the section.
//! 2. Build the professor-preferred set per section and each staff
//!    member's preference score per section.
//! 3. Order sections by ascending number of legal candidates, so scarce
//!    candidates go to the sections that have no alternatives.
//! 4. For each section below its target, rank the unconsumed legal
//!    candidates with the [`RankingEngine`] and append them until the
//!    target is met or the candidates run out.
//!
//! A section may finish above its target (the last candidate can
//! overshoot) or below it (too few legal staff). Neither is an error;
//! [`StaffingReport`](crate::report::StaffingReport) surfaces both.
//!
//! # Complexity
//! O(s log s + s · c log c) where s = sections, c = legal candidates per section.

use std::collections::{HashMap, HashSet};

use super::{AssignmentStrategy, SolveOutcome};
use crate::legality::legal_candidates;
use crate::models::{SolverAssignments, SolverData, StaffMember};
use crate::ranking::{RankingContext, RankingEngine};

/// One-pass greedy strategy, most-constrained section first.
#[derive(Debug, Clone)]
pub struct Greedy {
    engine: RankingEngine,
}

impl Greedy {
    /// Creates the strategy with the default candidate ordering
    /// (professor-preferred, then staff preference, then smallest hours).
    pub fn new() -> Self {
        Self {
            engine: RankingEngine::greedy_default(),
        }
    }

    /// Replaces the candidate ordering.
    pub fn with_ranking_engine(mut self, engine: RankingEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Runs the greedy pass and returns the placements.
    pub fn assign(&self, data: &SolverData) -> SolverAssignments {
        let legal = legal_candidates(data);
        let staff_by_id: HashMap<&str, &StaffMember> = data
            .staff_preferences
            .iter()
            .map(|p| (p.staff_id(), &p.staff))
            .collect();

        let mut assignments = SolverAssignments::new();
        let mut consumed: HashSet<&str> = HashSet::new();
        let mut assigned_hours: Vec<u32> = Vec::with_capacity(data.sections.len());

        // 1. Locked staff
        for section in &data.sections {
            assignments.ensure_section(&section.id);
            let mut hours: u32 = 0;
            for locked in section.locked_assignments() {
                if assignments.contains(&section.id, &locked.staff.id) {
                    continue;
                }
                assignments.push(&section.id, locked.staff.id.clone());
                consumed.insert(locked.staff.id.as_str());
                hours = hours.saturating_add(locked.staff.hours);
            }
            assigned_hours.push(hours);
        }

        // 2. Preference lookups
        let professor_preferred: HashMap<&str, HashSet<&str>> = data
            .sections
            .iter()
            .map(|section| {
                let preferred: HashSet<&str> = section
                    .professor_preference
                    .iter()
                    .flat_map(|p| p.preferred_staff.iter().map(String::as_str))
                    .collect();
                (section.id.as_str(), preferred)
            })
            .collect();

        let mut scores: HashMap<&str, HashMap<&str, u8>> = HashMap::new();
        for pref in &data.staff_preferences {
            let by_section = scores.entry(pref.staff_id()).or_default();
            for ranked in &pref.preferred_sections {
                let score = by_section.entry(ranked.section_id.as_str()).or_insert(0);
                *score = (*score).max(ranked.rank.score());
            }
        }

        // 3. Most-constrained first (stable: input order on ties)
        let mut order: Vec<usize> = (0..data.sections.len()).collect();
        order.sort_by_key(|&i| legal.count_for(&data.sections[i].id));

        // 4. Fill
        for idx in order {
            let section = &data.sections[idx];
            let required = section.required_hours;

            if assigned_hours[idx] >= required {
                tracing::debug!(
                    section = %section.id,
                    hours = assigned_hours[idx],
                    required,
                    "section already staffed by locks"
                );
                continue;
            }

            let candidates: Vec<&StaffMember> = legal
                .for_section(&section.id)
                .iter()
                .filter(|id| !consumed.contains(id.as_str()))
                .filter(|id| !assignments.contains(&section.id, id))
                .filter_map(|id| staff_by_id.get(id.as_str()).copied())
                .collect();

            let mut context = RankingContext::for_section(section.id.clone());
            if let Some(preferred) = professor_preferred.get(section.id.as_str()) {
                for candidate in &candidates {
                    if preferred.contains(candidate.id.as_str()) {
                        context = context.with_professor_preferred(candidate.id.clone());
                    }
                }
            }
            for candidate in &candidates {
                let score = scores
                    .get(candidate.id.as_str())
                    .and_then(|by_section| by_section.get(section.id.as_str()))
                    .copied()
                    .unwrap_or(0);
                context = context.with_preference_score(candidate.id.clone(), score);
            }

            for pick in self.engine.sort_indices(&candidates, &context) {
                let staff = candidates[pick];
                assignments.push(&section.id, staff.id.clone());
                consumed.insert(staff.id.as_str());
                assigned_hours[idx] = assigned_hours[idx].saturating_add(staff.hours);
                if assigned_hours[idx] >= required {
                    break;
                }
            }

            tracing::debug!(
                section = %section.id,
                hours = assigned_hours[idx],
                required,
                candidates = candidates.len(),
                "section filled"
            );
        }

        let short = data
            .sections
            .iter()
            .zip(&assigned_hours)
            .filter(|(section, hours)| **hours < section.required_hours)
            .count();
        tracing::info!(
            sections = data.sections.len(),
            placements = assignments.assignment_count(),
            under_provisioned = short,
            "greedy assignment complete"
        );

        assignments
    }
}

impl Default for Greedy {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentStrategy for Greedy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn solve(&self, data: &SolverData) -> SolveOutcome {
        SolveOutcome::Found(self.assign(data))
    }
}
