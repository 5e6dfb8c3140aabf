//! PLL generator variants.
//!
//! A variant is chosen with the `PllArch` tag and created through
//! `PllArch::create_pll`; the result is a closed `PllHandle` enum rather than a
//! trait object.

pub mod ecp5;
pub mod sim;

pub use ecp5::{Ecp5Output, Ecp5Pll, port_outputs};
pub use sim::SimPll;

use crate::domain::{ClockRequest, PllArch, SearchMode, SolutionFile, SolvedConfiguration};
use crate::error::PllError;

/// A configured clock generator.
#[derive(Debug, Clone, PartialEq)]
pub enum PllHandle {
    Ecp5(Ecp5Pll),
    Sim(SimPll),
}

impl PllArch {
    /// Validate the request and build the generator for this variant.
    pub fn create_pll(
        self,
        input_hz: f64,
        requests: &[ClockRequest],
        mode: SearchMode,
    ) -> Result<PllHandle, PllError> {
        match self {
            PllArch::Ecp5 => Ecp5Pll::new(input_hz, requests, mode).map(PllHandle::Ecp5),
            PllArch::Sim => SimPll::new(input_hz, requests).map(PllHandle::Sim),
        }
    }
}

impl PllHandle {
    pub fn arch(&self) -> PllArch {
        match self {
            PllHandle::Ecp5(_) => PllArch::Ecp5,
            PllHandle::Sim(_) => PllArch::Sim,
        }
    }

    pub fn input_hz(&self) -> f64 {
        match self {
            PllHandle::Ecp5(pll) => pll.input_hz(),
            PllHandle::Sim(pll) => pll.input_hz(),
        }
    }

    pub fn requests(&self) -> &[ClockRequest] {
        match self {
            PllHandle::Ecp5(pll) => pll.requests(),
            PllHandle::Sim(pll) => pll.requests(),
        }
    }

    /// Achieved output frequencies, index-aligned with the requests.
    pub fn outputs_hz(&self) -> Vec<f64> {
        match self {
            PllHandle::Ecp5(pll) => pll.config().output_hzs.clone(),
            PllHandle::Sim(pll) => pll.outputs_hz(),
        }
    }

    /// Divisor settings, for variants that have them.
    pub fn config(&self) -> Option<&SolvedConfiguration> {
        match self {
            PllHandle::Ecp5(pll) => Some(pll.config()),
            PllHandle::Sim(_) => None,
        }
    }

    pub fn to_solution_file(&self) -> SolutionFile {
        SolutionFile {
            tool: "pll".to_string(),
            arch: self.arch(),
            input_hz: self.input_hz(),
            requests: self.requests().to_vec(),
            outputs_hz: self.outputs_hz(),
            config: self.config().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MHZ;

    fn requests() -> Vec<ClockRequest> {
        vec![
            ClockRequest::new(10.0 * MHZ),
            ClockRequest::new(20.0 * MHZ),
            ClockRequest::new(30.0 * MHZ),
        ]
    }

    #[test]
    fn arch_tag_selects_variant() {
        let ecp5 = PllArch::Ecp5
            .create_pll(25.0 * MHZ, &requests(), SearchMode::Sequential)
            .unwrap();
        assert_eq!(ecp5.arch(), PllArch::Ecp5);
        assert!(ecp5.config().is_some());
        assert_eq!(ecp5.requests().len(), 3);

        let sim = PllArch::Sim
            .create_pll(25.0 * MHZ, &requests(), SearchMode::Sequential)
            .unwrap();
        assert_eq!(sim.arch(), PllArch::Sim);
        assert!(sim.config().is_none());
        assert_eq!(sim.outputs_hz(), vec![10.0 * MHZ, 20.0 * MHZ, 30.0 * MHZ]);
    }

    #[test]
    fn solution_file_mirrors_handle() {
        let handle = PllArch::Ecp5
            .create_pll(25.0 * MHZ, &requests(), SearchMode::Sequential)
            .unwrap();
        let file = handle.to_solution_file();
        assert_eq!(file.arch, PllArch::Ecp5);
        assert_eq!(file.input_hz, 25.0 * MHZ);
        assert_eq!(file.requests, requests());
        assert_eq!(Some(&file.outputs_hz), handle.config().map(|c| &c.output_hzs));
    }

    #[test]
    fn both_variants_reject_invalid_inputs() {
        for arch in [PllArch::Ecp5, PllArch::Sim] {
            let err = arch
                .create_pll(25.0 * MHZ, &[], SearchMode::Sequential)
                .unwrap_err();
            assert!(matches!(err, PllError::InvalidParameter { .. }));
        }
    }
}
