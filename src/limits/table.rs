//! Named limit tables.

use super::interval::{DivisorRange, FrequencyInterval};

pub const MHZ: f64 = 1e6;

/// Output port names of the ECP5 `EHXPLLL` primitive, by output index.
pub const ECP5_OUTPUT_PORTS: [&str; 3] = ["CLKOP", "CLKOS", "CLKOS2"];

/// Legal operating ranges of one PLL family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PllLimits {
    pub name: &'static str,
    /// Reference clock input.
    pub input: FrequencyInterval,
    /// Each output clock.
    pub output: FrequencyInterval,
    /// Phase detector input (`input / reference_div`).
    pub feedback: FrequencyInterval,
    /// Voltage-controlled oscillator.
    pub vco: FrequencyInterval,
    pub reference_div: DivisorRange,
    pub feedback_div: DivisorRange,
    pub output_div: DivisorRange,
    pub max_outputs: usize,
}

impl PllLimits {
    /// Lattice ECP5 `EHXPLLL`.
    pub const ECP5: PllLimits = PllLimits {
        name: "ECP5 EHXPLLL",
        input: FrequencyInterval::new(10.0 * MHZ, 400.0 * MHZ),
        output: FrequencyInterval::new(3.125 * MHZ, 400.0 * MHZ),
        feedback: FrequencyInterval::new(10.0 * MHZ, 400.0 * MHZ),
        vco: FrequencyInterval::new(400.0 * MHZ, 800.0 * MHZ),
        reference_div: DivisorRange::new(1, 128),
        feedback_div: DivisorRange::new(1, 128),
        output_div: DivisorRange::new(1, 128),
        max_outputs: 3,
    };
}

impl Default for PllLimits {
    fn default() -> Self {
        PllLimits::ECP5
    }
}
