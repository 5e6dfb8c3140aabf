//! Single-output divisor solving.
//!
//! For a fixed oscillator frequency the best divisor for one output is always
//! within a couple of steps of `round(vco / target)`, so we probe a small
//! window around that estimate instead of the full divisor range.

use crate::domain::ClockRequest;
use crate::limits::DivisorRange;

/// Probes run from `seed - PROBE_RADIUS` to `seed + PROBE_RADIUS`.
pub const PROBE_RADIUS: i64 = 2;

/// Best divisor found for one output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSolution {
    pub divisor: u32,
    pub frequency: f64,
    /// Squared relative error (unweighted).
    pub error2: f64,
}

/// Find the divisor in `range` closest to the request within its tolerance.
///
/// Returns `None` when no probed divisor is inside the tolerance window. Among
/// feasible probes the smallest squared error wins; an equal error does not
/// replace an earlier probe.
pub fn solve_output(vco_hz: f64, request: &ClockRequest, range: DivisorRange) -> Option<OutputSolution> {
    let seed = (vco_hz / request.frequency).round_ties_even() as i64;

    let mut best: Option<OutputSolution> = None;
    for fudge in -PROBE_RADIUS..=PROBE_RADIUS {
        let divisor = range.clamp(seed.saturating_add(fudge));
        let frequency = vco_hz / f64::from(divisor);
        let error = request.relative_error(frequency);
        if !request.tolerance.contains(error) {
            continue;
        }

        let error2 = error * error;
        if best.is_none_or(|b| error2 < b.error2) {
            best = Some(OutputSolution {
                divisor,
                frequency,
                error2,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{MHZ, PllLimits};

    const RANGE: DivisorRange = PllLimits::ECP5.output_div;

    #[test]
    fn exact_ratio_gives_zero_error() {
        let out = solve_output(600.0 * MHZ, &ClockRequest::new(100.0 * MHZ), RANGE).unwrap();
        assert_eq!(out.divisor, 6);
        assert_eq!(out.frequency, 100.0 * MHZ);
        assert_eq!(out.error2, 0.0);
    }

    #[test]
    fn picks_nearest_divisor_within_tolerance() {
        // 600 / 133 ~= 4.51 -> divisors 4 (150 MHz) and 5 (120 MHz), both > 9% off.
        let req = ClockRequest::new(133.0 * MHZ).with_tolerance(0.2);
        let out = solve_output(600.0 * MHZ, &req, RANGE).unwrap();
        assert_eq!(out.divisor, 5);
        assert!((out.frequency - 120.0 * MHZ).abs() < 1e-6);
    }

    #[test]
    fn reports_infeasible_when_no_probe_fits() {
        let req = ClockRequest::new(133.0 * MHZ).with_tolerance(0.01);
        assert!(solve_output(600.0 * MHZ, &req, RANGE).is_none());
    }

    #[test]
    fn asymmetric_tolerance_selects_side() {
        // 500 MHz: /20 = 25 MHz exact, /21 below, /19 above.
        let below = ClockRequest::new(25.0 * MHZ).with_tolerance_range(-0.1, -1e-6);
        let out = solve_output(500.0 * MHZ, &below, RANGE).unwrap();
        assert_eq!(out.divisor, 21);
        assert!(out.frequency < 25.0 * MHZ);

        let above = ClockRequest::new(25.0 * MHZ).with_tolerance_range(1e-6, 0.1);
        let out = solve_output(500.0 * MHZ, &above, RANGE).unwrap();
        assert_eq!(out.divisor, 19);
        assert!(out.frequency > 25.0 * MHZ);
    }

    #[test]
    fn probes_are_clamped_to_divisor_range() {
        // 800 / 3.125 = 256, far beyond the maximum divisor of 128.
        let strict = ClockRequest::new(3.125 * MHZ);
        assert!(solve_output(800.0 * MHZ, &strict, RANGE).is_none());

        let loose = ClockRequest::new(3.125 * MHZ).with_tolerance_range(0.0, 1.5);
        let out = solve_output(800.0 * MHZ, &loose, RANGE).unwrap();
        assert_eq!(out.divisor, 128);
        assert_eq!(out.frequency, 6.25 * MHZ);
    }
}
