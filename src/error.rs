//! Error types for the staffing solver.
//!
//! A solver that finds nothing is not an error: see
//! [`SolveOutcome`](crate::solver::SolveOutcome). These types cover the
//! failures around a solve: unreachable storage, bad configuration, and
//! caller mistakes such as an unknown strategy key.

use std::path::PathBuf;

/// Errors raised by a [`TermStore`](crate::assembly::TermStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// The store has no data for the requested term.
    #[error("unknown term '{0}'")]
    UnknownTerm(String),

    /// Stored data could not be decoded.
    #[error("malformed term data: {0}")]
    Malformed(String),
}

/// Errors from loading a [`SolverConfig`](crate::config::SolverConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The TOML text is invalid or has wrong field types.
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// The config could not be serialised back to TOML.
    #[error("TOML serialise error: {0}")]
    Serialize(String),
}

/// Top-level error for solve attempts.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Data assembly could not read the term from storage.
    #[error("data access failed: {0}")]
    DataAccess(#[from] StoreError),

    /// A strategy key outside the closed set was supplied.
    #[error("unknown strategy '{0}'; expected 'greedy' or 'backTracking'")]
    InvalidStrategy(String),

    /// Solver configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
