//! Shared solve/verify logic used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! config -> generator variant -> solution file
//!
//! The CLI can then focus on presentation (table vs JSON).

use tracing::debug;

use crate::domain::{PllArch, SolutionFile, SolveConfig};
use crate::error::AppError;
use crate::limits::PllLimits;
use crate::solve::verify;

/// Build the requested generator and return its solution record.
pub fn run_solve(config: &SolveConfig) -> Result<SolutionFile, AppError> {
    debug!(
        arch = ?config.arch,
        input_hz = config.input_hz,
        outputs = config.requests.len(),
        search = ?config.search,
        "solving PLL"
    );

    let handle = config
        .arch
        .create_pll(config.input_hz, &config.requests, config.search)?;
    Ok(handle.to_solution_file())
}

/// Re-check a loaded solution file.
///
/// ECP5 solutions are verified divisor by divisor and must match the search
/// result; simulated ones only need valid inputs and outputs equal to the
/// requests.
pub fn verify_solution(solution: &SolutionFile) -> Result<(), AppError> {
    let limits = PllLimits::ECP5;
    crate::solve::validate_inputs(solution.input_hz, &solution.requests, &limits)?;

    match (solution.arch, &solution.config) {
        (PllArch::Ecp5, Some(config)) => {
            verify(solution.input_hz, &solution.requests, config, &limits)
                .map_err(|v| AppError::new(4, format!("Verification failed: {v}")))?;
            if config.output_hzs != solution.outputs_hz {
                return Err(AppError::new(
                    4,
                    "Verification failed: outputs_hz does not match the configuration",
                ));
            }
            Ok(())
        }
        (PllArch::Ecp5, None) => Err(AppError::new(4, "Verification failed: ECP5 solution has no configuration")),
        (PllArch::Sim, _) => {
            let ideal: Vec<f64> = solution.requests.iter().map(|r| r.frequency).collect();
            if ideal == solution.outputs_hz {
                Ok(())
            } else {
                Err(AppError::new(4, "Verification failed: simulated outputs differ from requests"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockRequest, SearchMode};
    use crate::limits::MHZ;

    fn config(arch: PllArch, requests: Vec<ClockRequest>) -> SolveConfig {
        SolveConfig {
            arch,
            input_hz: 25.0 * MHZ,
            requests,
            search: SearchMode::Parallel,
            json: false,
            export: None,
        }
    }

    #[test]
    fn solve_then_verify_round_trip() {
        let cfg = config(
            PllArch::Ecp5,
            vec![ClockRequest::new(25.0 * MHZ), ClockRequest::new(100.0 * MHZ)],
        );
        let solution = run_solve(&cfg).unwrap();
        assert!(verify_solution(&solution).is_ok());
    }

    #[test]
    fn solver_failures_map_to_exit_codes() {
        let invalid = config(PllArch::Ecp5, vec![ClockRequest::new(1.0 * MHZ)]);
        assert_eq!(run_solve(&invalid).unwrap_err().exit_code(), 2);

        let unreachable = config(PllArch::Ecp5, vec![ClockRequest::new(31_415_926.0).with_tolerance(1e-11)]);
        assert_eq!(run_solve(&unreachable).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn tampered_solution_fails_verification() {
        let cfg = config(PllArch::Ecp5, vec![ClockRequest::new(25.0 * MHZ)]);
        let mut solution = run_solve(&cfg).unwrap();
        if let Some(c) = solution.config.as_mut() {
            c.feedback_div += 1;
        }
        assert_eq!(verify_solution(&solution).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn legal_but_suboptimal_solution_fails_verification() {
        let cfg = config(PllArch::Ecp5, vec![ClockRequest::new(25.0 * MHZ)]);
        let mut solution = run_solve(&cfg).unwrap();
        if let Some(c) = solution.config.as_mut() {
            c.feedback_div = 20;
            c.output_divs = vec![20];
            c.vco_hz = 500.0 * MHZ;
        }
        let err = verify_solution(&solution).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("reference=1 feedback=16"));
    }

    #[test]
    fn sim_solution_verifies_against_requests() {
        let cfg = config(PllArch::Sim, vec![ClockRequest::new(48.0 * MHZ)]);
        let mut solution = run_solve(&cfg).unwrap();
        assert!(verify_solution(&solution).is_ok());

        solution.outputs_hz[0] += 1.0;
        assert_eq!(verify_solution(&solution).unwrap_err().exit_code(), 4);
    }
}
