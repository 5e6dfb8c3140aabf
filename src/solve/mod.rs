//! PLL divisor solving.
//!
//! Responsibilities:
//!
//! - validate the request against a `PllLimits` table
//! - enumerate (reference, feedback) divisor pairs (optionally in parallel)
//! - solve each output divisor for a candidate oscillator frequency
//! - keep the best configuration under a fixed total order

pub mod output;
pub mod search;
pub mod selection;
pub mod validate;
pub mod verify;

pub use output::*;
pub use search::*;
pub use selection::*;
pub use validate::*;
pub use verify::*;

use crate::domain::{ClockRequest, SearchMode, SolvedConfiguration};
use crate::error::PllError;
use crate::limits::PllLimits;

/// Validate the inputs, then search for the best divisor configuration.
pub fn solve(
    input_hz: f64,
    requests: &[ClockRequest],
    limits: &PllLimits,
    mode: SearchMode,
) -> Result<SolvedConfiguration, PllError> {
    validate_inputs(input_hz, requests, limits)?;
    search_divisors(input_hz, requests, limits, mode)
}
