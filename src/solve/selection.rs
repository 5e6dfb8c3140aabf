//! Best-configuration selection.
//!
//! Candidates are totally ordered by
//! `(error, reference_div, feedback_div, output_divs, output_hzs)`, compared
//! field by field in that order. The selector keeps the minimum, so the result
//! does not depend on the order candidates arrive in.

use std::cmp::Ordering;

use crate::domain::SolvedConfiguration;

/// A fully solved (reference, feedback) divisor pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub reference_div: u32,
    pub feedback_div: u32,
    pub feedback_hz: f64,
    pub vco_hz: f64,
    pub output_divs: Vec<u32>,
    pub output_hzs: Vec<f64>,
    /// Sum of weighted squared relative errors.
    pub error: f64,
}

impl Candidate {
    pub fn into_configuration(self) -> SolvedConfiguration {
        SolvedConfiguration {
            error: self.error,
            reference_div: self.reference_div,
            feedback_div: self.feedback_div,
            output_divs: self.output_divs,
            output_hzs: self.output_hzs,
            feedback_hz: self.feedback_hz,
            vco_hz: self.vco_hz,
        }
    }
}

impl From<SolvedConfiguration> for Candidate {
    fn from(config: SolvedConfiguration) -> Self {
        Candidate {
            reference_div: config.reference_div,
            feedback_div: config.feedback_div,
            feedback_hz: config.feedback_hz,
            vco_hz: config.vco_hz,
            output_divs: config.output_divs,
            output_hzs: config.output_hzs,
            error: config.error,
        }
    }
}

/// Total order used for selection. Smaller is better.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    a.error
        .total_cmp(&b.error)
        .then_with(|| a.reference_div.cmp(&b.reference_div))
        .then_with(|| a.feedback_div.cmp(&b.feedback_div))
        .then_with(|| a.output_divs.cmp(&b.output_divs))
        .then_with(|| compare_frequencies(&a.output_hzs, &b.output_hzs))
}

fn compare_frequencies(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Running best-of over feasible candidates.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    best: Option<Candidate>,
    offered: usize,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate; it replaces the incumbent only if strictly smaller.
    ///
    /// Returns `true` when the candidate was kept.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        self.offered += 1;
        let replace = match &self.best {
            None => true,
            Some(best) => compare_candidates(&candidate, best) == Ordering::Less,
        };
        if replace {
            self.best = Some(candidate);
        }
        replace
    }

    /// Combine two partial selections (used to reduce parallel workers).
    pub fn merge(mut self, other: Selector) -> Selector {
        let offered = self.offered + other.offered;
        if let Some(candidate) = other.best {
            self.offer(candidate);
        }
        self.offered = offered;
        self
    }

    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }

    /// Number of feasible candidates seen.
    pub fn offered(&self) -> usize {
        self.offered
    }
}
