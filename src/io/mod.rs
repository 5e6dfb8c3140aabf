//! Input/output helpers.
//!
//! - solution JSON read/write (`solution`)

pub mod solution;

pub use solution::*;
