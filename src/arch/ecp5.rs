//! Lattice ECP5 `EHXPLLL` clock generator.
//!
//! ```text
//!         input
//!           v
//!     {/ reference_div}
//!           v
//!         {PD} <-------------+
//!           v                |
//!         {VCO} -----> {/ feedback_div}
//!           |
//!           +----------------+----------------+
//!           v                v                v
//!   {/ output_div[0]}  {/ output_div[1]}  {/ output_div[2]}
//!           v                v                v
//!         CLKOP            CLKOS            CLKOS2
//! ```
//!
//! The phase detector drives the VCO until `input / reference_div` and
//! `VCO / feedback_div` match, so `VCO = input * feedback_div / reference_div`.

use crate::domain::{ClockRequest, SearchMode, SolvedConfiguration};
use crate::error::PllError;
use crate::limits::{ECP5_OUTPUT_PORTS, PllLimits};
use crate::solve::solve;

#[derive(Debug, Clone, PartialEq)]
pub struct Ecp5Pll {
    input_hz: f64,
    requests: Vec<ClockRequest>,
    config: SolvedConfiguration,
}

/// One enabled output port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecp5Output {
    pub port: &'static str,
    pub divisor: u32,
    pub frequency: f64,
}

impl Ecp5Pll {
    pub fn new(input_hz: f64, requests: &[ClockRequest], mode: SearchMode) -> Result<Self, PllError> {
        let config = solve(input_hz, requests, &PllLimits::ECP5, mode)?;
        Ok(Self {
            input_hz,
            requests: requests.to_vec(),
            config,
        })
    }

    pub fn input_hz(&self) -> f64 {
        self.input_hz
    }

    pub fn requests(&self) -> &[ClockRequest] {
        &self.requests
    }

    pub fn config(&self) -> &SolvedConfiguration {
        &self.config
    }
}

/// Enabled outputs of a configuration in port order.
///
/// Outputs beyond `CLKOS2` are dropped.
pub fn port_outputs(config: &SolvedConfiguration) -> Vec<Ecp5Output> {
    ECP5_OUTPUT_PORTS
        .iter()
        .zip(config.output_divs.iter().zip(&config.output_hzs))
        .map(|(&port, (&divisor, &frequency))| Ecp5Output {
            port,
            divisor,
            frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MHZ;

    #[test]
    fn outputs_are_named_in_port_order() {
        let requests = [ClockRequest::new(25.0 * MHZ), ClockRequest::new(50.0 * MHZ)];
        let pll = Ecp5Pll::new(25.0 * MHZ, &requests, SearchMode::Sequential).unwrap();
        let outputs = port_outputs(pll.config());
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].port, "CLKOP");
        assert_eq!(outputs[1].port, "CLKOS");
        assert_eq!(outputs[1].frequency, 50.0 * MHZ);
    }
}
