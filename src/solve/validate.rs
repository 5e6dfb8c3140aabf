//! Static input checks, run before any search.

use crate::domain::ClockRequest;
use crate::error::{Parameter, PllError};
use crate::limits::{PllLimits, format_hz};

/// Check output count, input frequency and every request against `limits`.
///
/// Checks run in a fixed order and the first violation is returned.
///
/// Weights and tolerances are checked after all frequencies. A non-finite
/// weight or tolerance bound, or a tolerance with `below > above` (including a
/// negative symmetric tolerance), is reported here as `InvalidParameter`. Left
/// unchecked, such a request could never be met and the search would end in
/// `NoSolution` instead.
pub fn validate_inputs(
    input_hz: f64,
    requests: &[ClockRequest],
    limits: &PllLimits,
) -> Result<(), PllError> {
    if !(1..=limits.max_outputs).contains(&requests.len()) {
        return Err(PllError::invalid(
            Parameter::OutputCount,
            format!(
                "{} outputs requested, {} supports 1 to {}",
                requests.len(),
                limits.name,
                limits.max_outputs
            ),
        ));
    }

    if !limits.input.contains(input_hz) {
        return Err(PllError::invalid(
            Parameter::InputFrequency,
            format!("{} is outside {}", format_hz(input_hz), limits.input),
        ));
    }

    for (index, request) in requests.iter().enumerate() {
        if !limits.output.contains(request.frequency) {
            return Err(PllError::invalid(
                Parameter::OutputFrequency { index },
                format!("{} is outside {}", format_hz(request.frequency), limits.output),
            ));
        }
    }

    for (index, request) in requests.iter().enumerate() {
        if !(request.weight.is_finite() && request.weight > 0.0) {
            return Err(PllError::invalid(
                Parameter::OutputWeight { index },
                format!("{} must be finite and > 0", request.weight),
            ));
        }

        let below = request.tolerance.below();
        let above = request.tolerance.above();
        if !(below.is_finite() && above.is_finite() && below <= above) {
            return Err(PllError::invalid(
                Parameter::OutputTolerance { index },
                format!("[{below}, {above}] must be finite with below <= above"),
            ));
        }
    }

    Ok(())
}
