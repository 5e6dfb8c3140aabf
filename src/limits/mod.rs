//! Static hardware limits of a PLL family.
//!
//! Everything the solver needs to know about the target generator lives in a
//! `PllLimits` table, so a different family only needs a different table.

pub mod interval;
pub mod table;

pub use interval::*;
pub use table::*;
