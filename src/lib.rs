//! Teaching-assistant staffing solver.
//!
//! Places qualified staff into course sections so that each section's
//! weekly help-hour target is met, while honouring coordinator locks,
//! professor prefer/avoid lists and staff preferences. Two strategies are
//! available behind one dispatcher: a fast greedy fill and an exhaustive
//! backtracking search that keeps every section inside an hour band.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `StaffMember`, `StaffPreference`,
//!   `SolverData`, `SolverAssignments`
//! - **`assembly`**: Builds `SolverData` for a term from a `TermStore`
//! - **`validation`**: Input integrity checks (duplicate IDs, conflicting locks)
//! - **`legality`**: Per-section legal candidate lists
//! - **`ranking`**: Rule-based candidate ordering for the greedy strategy
//! - **`solver`**: Greedy and backtracking strategies plus the dispatcher
//! - **`report`**: Hour coverage report and invariant audit of an output
//! - **`config`**: Margin of error and solver settings (TOML)
//!
//! # Example
//! ```
//! use ta_staffing::assembly::{assemble_solver_data, InMemoryStore, TermSnapshot};
//! use ta_staffing::config::SolverConfig;
//! use ta_staffing::models::{Section, StaffMember, StaffPreference};
//! use ta_staffing::solve_assignments_named;
//!
//! let store = InMemoryStore::new().with_term(
//!     "2024F",
//!     TermSnapshot::new(
//!         vec![Section::new("CS101-01", 10)],
//!         vec![StaffPreference::new(StaffMember::new("s1", "Ada", 10)).qualified_for("CS101-01")],
//!     ),
//! );
//!
//! let data = assemble_solver_data(&store, "2024F")?;
//! let outcome = solve_assignments_named("backTracking", &data, &SolverConfig::default())?;
//! assert!(outcome.is_found());
//! # Ok::<(), ta_staffing::SolverError>(())
//! ```

pub mod assembly;
pub mod config;
pub mod error;
pub mod legality;
pub mod models;
pub mod ranking;
pub mod report;
pub mod solver;
pub mod validation;

pub use error::{ConfigError, SolverError, StoreError};
pub use solver::{solve_assignments, solve_assignments_named, SolveOutcome, StrategyKey};
