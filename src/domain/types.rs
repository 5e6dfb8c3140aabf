//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - passed through the search by reference
//! - exported to JSON
//! - reloaded later for verification

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default symmetric tolerance (0.1%).
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Allowed relative error of one output clock.
///
/// Serialized as a bare number (symmetric) or a `[below, above]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tolerance {
    /// Relative error must lie in `[-t, t]`.
    Symmetric(f64),
    /// Relative error must lie in `[below, above]` (both signed).
    Asymmetric(f64, f64),
}

impl Tolerance {
    pub fn below(self) -> f64 {
        match self {
            Tolerance::Symmetric(t) => -t,
            Tolerance::Asymmetric(below, _) => below,
        }
    }

    pub fn above(self) -> f64 {
        match self {
            Tolerance::Symmetric(t) => t,
            Tolerance::Asymmetric(_, above) => above,
        }
    }

    pub fn contains(self, relative_error: f64) -> bool {
        self.below() <= relative_error && relative_error <= self.above()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Symmetric(DEFAULT_TOLERANCE)
    }
}

fn default_weight() -> f64 {
    1.0
}

/// One requested output clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockRequest {
    /// Target frequency in Hz.
    pub frequency: f64,
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Scale of this output's squared error in the total error.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl ClockRequest {
    /// Request with the default tolerance and weight.
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            tolerance: Tolerance::default(),
            weight: default_weight(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Tolerance::Symmetric(tolerance);
        self
    }

    pub fn with_tolerance_range(mut self, below: f64, above: f64) -> Self {
        self.tolerance = Tolerance::Asymmetric(below, above);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// `(achieved - requested) / requested`.
    pub fn relative_error(&self, achieved_hz: f64) -> f64 {
        (achieved_hz - self.frequency) / self.frequency
    }
}

/// Divisor settings accepted by the search.
///
/// `output_divs` and `output_hzs` are index-aligned with the request list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedConfiguration {
    /// Total weighted squared relative error.
    pub error: f64,
    pub reference_div: u32,
    pub feedback_div: u32,
    pub output_divs: Vec<u32>,
    pub output_hzs: Vec<f64>,
    /// Phase detector frequency (`input / reference_div`).
    pub feedback_hz: f64,
    /// Oscillator frequency (`feedback_hz * feedback_div`).
    pub vco_hz: f64,
}

/// Which generator variant to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PllArch {
    /// Lattice ECP5 hardware PLL (full divisor search).
    Ecp5,
    /// Behavioral simulation model (ideal outputs, no search).
    Sim,
}

impl PllArch {
    pub fn display_name(self) -> &'static str {
        match self {
            PllArch::Ecp5 => "ECP5",
            PllArch::Sim => "Simulation",
        }
    }
}

/// How the (reference, feedback) divisor space is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Sequential,
    /// Partition by reference divisor across rayon workers.
    Parallel,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub arch: PllArch,
    pub input_hz: f64,
    pub requests: Vec<ClockRequest>,
    pub search: SearchMode,
    pub json: bool,
    pub export: Option<PathBuf>,
}

/// A saved solution (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionFile {
    pub tool: String,
    pub arch: PllArch,
    pub input_hz: f64,
    pub requests: Vec<ClockRequest>,
    /// Achieved output frequencies, index-aligned with `requests`.
    pub outputs_hz: Vec<f64>,
    /// Divisor settings; absent for the simulation model.
    pub config: Option<SolvedConfiguration>,
}
