//! Reporting utilities: formatted terminal output for solutions and limits.

pub mod format;

pub use format::*;
