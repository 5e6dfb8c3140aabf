//! Domain types used throughout the solver.
//!
//! This module defines:
//!
//! - clock requests and tolerances (`ClockRequest`, `Tolerance`)
//! - solver outputs (`SolvedConfiguration`)
//! - run configuration and the saved solution file (`SolveConfig`, `SolutionFile`)

pub mod types;

pub use types::*;
