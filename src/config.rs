//! Solver configuration loaded from TOML or built programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "backTracking"
//! max_explored = 1000000
//!
//! [margin]
//! short_hours = 10
//! over_hours = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::solver::StrategyKey;

/// Default tolerance below the hour target.
pub const DEFAULT_SHORT_MOE_HOURS: u32 = 10;

/// Default tolerance above the hour target.
pub const DEFAULT_OVER_MOE_HOURS: u32 = 10;

/// Hour tolerance around a section's target, used by the backtracking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginOfError {
    /// Hours a section may fall short of its target.
    pub short_hours: u32,
    /// Hours a section may exceed its target.
    pub over_hours: u32,
}

impl MarginOfError {
    /// Creates a margin.
    pub fn new(short_hours: u32, over_hours: u32) -> Self {
        Self {
            short_hours,
            over_hours,
        }
    }

    /// Inclusive acceptable band `[required - short, required + over]`.
    ///
    /// The lower bound saturates at zero.
    pub fn band(&self, required_hours: u32) -> (u32, u32) {
        (
            required_hours.saturating_sub(self.short_hours),
            required_hours.saturating_add(self.over_hours),
        )
    }

    /// Whether `hours` is acceptable for a section needing `required_hours`.
    #[inline]
    pub fn accepts(&self, required_hours: u32, hours: u32) -> bool {
        let (low, high) = self.band(required_hours);
        hours >= low && hours <= high
    }
}

impl Default for MarginOfError {
    fn default() -> Self {
        Self {
            short_hours: DEFAULT_SHORT_MOE_HOURS,
            over_hours: DEFAULT_OVER_MOE_HOURS,
        }
    }
}

/// Configuration for a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Strategy used when the caller does not name one.
    pub strategy: StrategyKey,
    /// Upper bound on candidate subsets the backtracking search examines.
    /// `None` = unbounded.
    pub max_explored: Option<u64>,
    /// Backtracking hour tolerance.
    pub margin: MarginOfError,
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Sets the default strategy.
    pub fn with_strategy(mut self, strategy: StrategyKey) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the hour tolerance.
    pub fn with_margin(mut self, margin: MarginOfError) -> Self {
        self.margin = margin;
        self
    }

    /// Bounds the backtracking search.
    pub fn with_max_explored(mut self, max_explored: u64) -> Self {
        self.max_explored = Some(max_explored);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKey::Greedy,
            margin: MarginOfError::default(),
            max_explored: None,
        }
    }
}
