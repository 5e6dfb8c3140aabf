//! Exhaustive (reference, feedback) divisor search.
//!
//! The internal frequency windows make most of the 128×128 pair space illegal,
//! and each remaining pair costs a handful of probes per output, so a full
//! enumeration is cheap and avoids solving the non-convex integer problem
//! analytically.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{ClockRequest, SearchMode, SolvedConfiguration};
use crate::error::PllError;
use crate::limits::PllLimits;
use crate::solve::output::solve_output;
use crate::solve::selection::{Candidate, Selector};

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// (reference, feedback) pairs visited.
    pub pairs: usize,
    /// Pairs rejected by the feedback or oscillator window.
    pub out_of_window: usize,
    /// Pairs where at least one output had no divisor within tolerance.
    pub infeasible: usize,
    /// Pairs handed to the selector.
    pub feasible: usize,
}

impl SearchStats {
    fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            pairs: self.pairs + other.pairs,
            out_of_window: self.out_of_window + other.out_of_window,
            infeasible: self.infeasible + other.infeasible,
            feasible: self.feasible + other.feasible,
        }
    }
}

/// Search all divisor pairs for the best configuration.
///
/// Inputs are assumed to be validated (see `validate_inputs`). Both search
/// modes return the same configuration.
pub fn search_divisors(
    input_hz: f64,
    requests: &[ClockRequest],
    limits: &PllLimits,
    mode: SearchMode,
) -> Result<SolvedConfiguration, PllError> {
    let (selector, stats) = match mode {
        SearchMode::Sequential => {
            let mut selector = Selector::new();
            let mut stats = SearchStats::default();
            for reference_div in limits.reference_div.iter() {
                search_reference_div(input_hz, reference_div, requests, limits, &mut selector, &mut stats);
            }
            (selector, stats)
        }
        SearchMode::Parallel => limits
            .reference_div
            .iter()
            .into_par_iter()
            .map(|reference_div| {
                let mut selector = Selector::new();
                let mut stats = SearchStats::default();
                search_reference_div(input_hz, reference_div, requests, limits, &mut selector, &mut stats);
                (selector, stats)
            })
            .reduce(
                || (Selector::new(), SearchStats::default()),
                |(a, a_stats), (b, b_stats)| (a.merge(b), a_stats.merge(b_stats)),
            ),
    };

    debug!(
        pairs = stats.pairs,
        out_of_window = stats.out_of_window,
        infeasible = stats.infeasible,
        feasible = stats.feasible,
        "divisor search finished"
    );

    let Some(best) = selector.into_best() else {
        return Err(PllError::NoSolution);
    };

    info!(
        reference_div = best.reference_div,
        feedback_div = best.feedback_div,
        vco_hz = best.vco_hz,
        error = best.error,
        "selected PLL configuration"
    );
    Ok(best.into_configuration())
}

fn search_reference_div(
    input_hz: f64,
    reference_div: u32,
    requests: &[ClockRequest],
    limits: &PllLimits,
    selector: &mut Selector,
    stats: &mut SearchStats,
) {
    let feedback_hz = input_hz / f64::from(reference_div);

    for feedback_div in limits.feedback_div.iter() {
        stats.pairs += 1;
        let vco_hz = feedback_hz * f64::from(feedback_div);
        if !limits.feedback.contains(feedback_hz) || !limits.vco.contains(vco_hz) {
            stats.out_of_window += 1;
            continue;
        }

        match evaluate_pair(reference_div, feedback_div, feedback_hz, vco_hz, requests, limits) {
            Some(candidate) => {
                stats.feasible += 1;
                selector.offer(candidate);
            }
            None => stats.infeasible += 1,
        }
    }
}

/// Solve every output for one divisor pair.
///
/// Returns `None` as soon as one output has no feasible divisor; partial
/// configurations are never produced.
pub fn evaluate_pair(
    reference_div: u32,
    feedback_div: u32,
    feedback_hz: f64,
    vco_hz: f64,
    requests: &[ClockRequest],
    limits: &PllLimits,
) -> Option<Candidate> {
    let mut output_divs = Vec::with_capacity(requests.len());
    let mut output_hzs = Vec::with_capacity(requests.len());
    let mut error = 0.0;

    for request in requests {
        let out = solve_output(vco_hz, request, limits.output_div)?;
        output_divs.push(out.divisor);
        output_hzs.push(out.frequency);
        error += out.error2 * request.weight;
    }

    Some(Candidate {
        reference_div,
        feedback_div,
        feedback_hz,
        vco_hz,
        output_divs,
        output_hzs,
        error,
    })
}
