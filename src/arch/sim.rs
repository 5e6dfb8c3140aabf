//! Behavioral PLL model for simulation.
//!
//! Accepts the same inputs as the hardware variant but skips the divisor
//! search: every output runs at exactly its requested frequency.

use crate::domain::ClockRequest;
use crate::error::PllError;
use crate::limits::PllLimits;
use crate::solve::validate_inputs;

#[derive(Debug, Clone, PartialEq)]
pub struct SimPll {
    input_hz: f64,
    requests: Vec<ClockRequest>,
}

impl SimPll {
    pub fn new(input_hz: f64, requests: &[ClockRequest]) -> Result<Self, PllError> {
        validate_inputs(input_hz, requests, &PllLimits::ECP5)?;
        Ok(Self {
            input_hz,
            requests: requests.to_vec(),
        })
    }

    pub fn input_hz(&self) -> f64 {
        self.input_hz
    }

    pub fn requests(&self) -> &[ClockRequest] {
        &self.requests
    }

    pub fn outputs_hz(&self) -> Vec<f64> {
        self.requests.iter().map(|r| r.frequency).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MHZ;

    #[test]
    fn sim_accepts_frequencies_the_hardware_cannot_hit_exactly() {
        // No integer ratio from 25 MHz gives this within 1e-11, but the model is ideal.
        let requests = [ClockRequest::new(31_415_926.0).with_tolerance(1e-11)];
        let pll = SimPll::new(25.0 * MHZ, &requests).unwrap();
        assert_eq!(pll.outputs_hz(), vec![31_415_926.0]);
    }
}
