//! Re-check a configuration against its requests and the hardware limits.
//!
//! Used for configurations that did not come straight out of the search, e.g.
//! a solution file loaded from disk. A configuration that is legal but not the
//! one the search would select is rejected as well.

use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::{ClockRequest, SearchMode, SolvedConfiguration};
use crate::limits::{DivisorRange, FrequencyInterval, PllLimits};
use crate::solve::search::search_divisors;
use crate::solve::selection::{Candidate, compare_candidates};

/// Relative slack when comparing recorded frequencies to recomputed ones.
///
/// Frequencies may have gone through a JSON round trip.
const RECORD_SLACK: f64 = 1e-12;

/// First broken invariant found by `verify`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{requests} requests but {divisors} output divisors and {frequencies} output frequencies")]
    OutputCountMismatch {
        requests: usize,
        divisors: usize,
        frequencies: usize,
    },

    #[error("{which} divisor {value} is outside {range}")]
    DivisorOutOfRange {
        which: String,
        value: u32,
        range: DivisorRange,
    },

    #[error("{which} frequency {hz} Hz is outside {interval}")]
    FrequencyOutOfRange {
        which: &'static str,
        hz: f64,
        interval: FrequencyInterval,
    },

    #[error("recorded {which} {recorded} does not match derived {derived}")]
    RecordMismatch {
        which: String,
        recorded: f64,
        derived: f64,
    },

    #[error("output {index} relative error {error:e} is outside [{below}, {above}]")]
    ToleranceExceeded {
        index: usize,
        error: f64,
        below: f64,
        above: f64,
    },

    #[error("configuration is not the best one for these requests ({})", describe_optimum(.optimum))]
    NotOptimal { optimum: Option<SolvedConfiguration> },
}

fn describe_optimum(optimum: &Option<SolvedConfiguration>) -> String {
    match optimum {
        Some(best) => format!(
            "expected reference={} feedback={} outputs={:?}",
            best.reference_div, best.feedback_div, best.output_divs
        ),
        None => "the search finds no configuration".to_string(),
    }
}

/// Check every invariant of `config` for the given inputs.
///
/// Per-field checks run first. The last check reruns the sequential search
/// and requires `config` to compare equal to its result.
pub fn verify(
    input_hz: f64,
    requests: &[ClockRequest],
    config: &SolvedConfiguration,
    limits: &PllLimits,
) -> Result<(), Violation> {
    if config.output_divs.len() != requests.len() || config.output_hzs.len() != requests.len() {
        return Err(Violation::OutputCountMismatch {
            requests: requests.len(),
            divisors: config.output_divs.len(),
            frequencies: config.output_hzs.len(),
        });
    }

    check_divisor("reference", config.reference_div, limits.reference_div)?;
    check_divisor("feedback", config.feedback_div, limits.feedback_div)?;
    for (index, &div) in config.output_divs.iter().enumerate() {
        check_divisor(&format!("output {index}"), div, limits.output_div)?;
    }

    let feedback_hz = input_hz / f64::from(config.reference_div);
    let vco_hz = feedback_hz * f64::from(config.feedback_div);
    check_record("feedback".to_string(), config.feedback_hz, feedback_hz)?;
    check_record("VCO".to_string(), config.vco_hz, vco_hz)?;

    if !limits.feedback.contains(feedback_hz) {
        return Err(Violation::FrequencyOutOfRange {
            which: "feedback",
            hz: feedback_hz,
            interval: limits.feedback,
        });
    }
    if !limits.vco.contains(vco_hz) {
        return Err(Violation::FrequencyOutOfRange {
            which: "VCO",
            hz: vco_hz,
            interval: limits.vco,
        });
    }

    let mut achieved_hzs = Vec::with_capacity(requests.len());
    let mut total_error = 0.0;
    for (index, (request, (&div, &recorded))) in requests
        .iter()
        .zip(config.output_divs.iter().zip(&config.output_hzs))
        .enumerate()
    {
        let achieved = vco_hz / f64::from(div);
        check_record(format!("output {index}"), recorded, achieved)?;

        let error = request.relative_error(achieved);
        if !request.tolerance.contains(error) {
            return Err(Violation::ToleranceExceeded {
                index,
                error,
                below: request.tolerance.below(),
                above: request.tolerance.above(),
            });
        }
        total_error += error * error * request.weight;
        achieved_hzs.push(achieved);
    }
    check_record("total error".to_string(), config.error, total_error)?;

    let derived = Candidate {
        reference_div: config.reference_div,
        feedback_div: config.feedback_div,
        feedback_hz,
        vco_hz,
        output_divs: config.output_divs.clone(),
        output_hzs: achieved_hzs,
        error: total_error,
    };
    check_optimal(input_hz, requests, &derived, limits)
}

fn check_optimal(
    input_hz: f64,
    requests: &[ClockRequest],
    derived: &Candidate,
    limits: &PllLimits,
) -> Result<(), Violation> {
    match search_divisors(input_hz, requests, limits, SearchMode::Sequential) {
        Ok(best) => {
            if compare_candidates(derived, &Candidate::from(best.clone())) == Ordering::Equal {
                Ok(())
            } else {
                Err(Violation::NotOptimal { optimum: Some(best) })
            }
        }
        // The output divisors lie outside every probe window.
        Err(_) => Err(Violation::NotOptimal { optimum: None }),
    }
}

fn check_divisor(which: &str, value: u32, range: DivisorRange) -> Result<(), Violation> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(Violation::DivisorOutOfRange {
            which: which.to_string(),
            value,
            range,
        })
    }
}

fn check_record(which: String, recorded: f64, derived: f64) -> Result<(), Violation> {
    let slack = RECORD_SLACK * recorded.abs().max(derived.abs());
    if (recorded - derived).abs() <= slack {
        Ok(())
    } else {
        Err(Violation::RecordMismatch {
            which,
            recorded,
            derived,
        })
    }
}
