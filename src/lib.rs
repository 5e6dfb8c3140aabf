//! `pll-solver` library crate.
//!
//! Finds reference, feedback and output divisor settings for FPGA PLL clock
//! generators. The binary (`pll`) is a thin wrapper around this library so
//! that the solver is testable and reusable without spawning processes.

pub mod app;
pub mod arch;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod limits;
pub mod report;
pub mod solve;
