//! Strategy registry and dispatcher.
//!
//! The strategy set is closed: [`StrategyKey`] names every strategy and
//! carries its label and description. String keys arriving from outside
//! (requests, config files) are parsed up front and rejected before any
//! data is touched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AssignmentStrategy, Backtracking, Greedy, SolveOutcome};
use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::models::SolverData;

/// Registry key of an assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKey {
    /// One-pass greedy fill.
    #[serde(rename = "greedy")]
    Greedy,
    /// Exhaustive backtracking search.
    #[serde(rename = "backTracking", alias = "backtracking")]
    BackTracking,
}

/// Human-facing description of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyDescriptor {
    /// Registry key.
    pub key: StrategyKey,
    /// Short label.
    pub label: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
}

impl StrategyKey {
    /// Every registered strategy, in display order.
    pub const ALL: [StrategyKey; 2] = [StrategyKey::Greedy, StrategyKey::BackTracking];

    /// Wire name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKey::Greedy => "greedy",
            StrategyKey::BackTracking => "backTracking",
        }
    }

    /// Label and description for this strategy.
    pub fn descriptor(self) -> StrategyDescriptor {
        match self {
            StrategyKey::Greedy => StrategyDescriptor {
                key: self,
                label: "Greedy",
                description: "Staffs the hardest-to-fill sections first, adding professor-preferred \
                              and staff-preferred candidates until each section meets its hours. \
                              Fast; may overshoot or leave sections short.",
            },
            StrategyKey::BackTracking => StrategyDescriptor {
                key: self,
                label: "Backtracking",
                description: "Searches combinations of candidates section by section until every \
                              section lands within the hour margin of error. Exhaustive; can be \
                              slow for large candidate lists and may find no solution.",
            },
        }
    }

    /// Instantiates the strategy with the given configuration.
    pub fn build(self, config: &SolverConfig) -> Box<dyn AssignmentStrategy> {
        match self {
            StrategyKey::Greedy => Box::new(Greedy::new()),
            StrategyKey::BackTracking => Box::new(Backtracking::from_config(config)),
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKey {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(StrategyKey::Greedy),
            "backtracking" => Ok(StrategyKey::BackTracking),
            _ => Err(SolverError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Runs the named strategy on `data`.
pub fn solve_assignments(
    strategy: StrategyKey,
    data: &SolverData,
    config: &SolverConfig,
) -> SolveOutcome {
    let solver = strategy.build(config);
    tracing::info!(
        strategy = solver.name(),
        sections = data.sections.len(),
        staff = data.staff_preferences.len(),
        "solving assignments"
    );
    solver.solve(data)
}

/// Parses a strategy key from text, then runs it.
///
/// # Errors
/// [`SolverError::InvalidStrategy`] if `strategy` names no registered strategy.
pub fn solve_assignments_named(
    strategy: &str,
    data: &SolverData,
    config: &SolverConfig,
) -> Result<SolveOutcome, SolverError> {
    let key: StrategyKey = strategy.parse()?;
    Ok(solve_assignments(key, data, config))
}
