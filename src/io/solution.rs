//! Read/write solution JSON files.
//!
//! A solution file is the portable record of one solve: the arch, the input
//! frequency, the requests, and the divisor configuration. The schema is
//! defined by `domain::SolutionFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::SolutionFile;
use crate::error::AppError;

/// Write a solution JSON file.
pub fn write_solution_json(path: &Path, solution: &SolutionFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create solution JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, solution)
        .map_err(|e| AppError::new(2, format!("Failed to write solution JSON: {e}")))?;

    Ok(())
}

/// Read a solution JSON file.
pub fn read_solution_json(path: &Path) -> Result<SolutionFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open solution JSON '{}': {e}", path.display())))?;
    let solution: SolutionFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid solution JSON: {e}")))?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockRequest, PllArch, SearchMode};
    use crate::limits::{MHZ, PllLimits};
    use crate::solve::verify;

    #[test]
    fn written_solution_reloads_and_still_verifies() {
        let requests = [
            ClockRequest::new(25.0 * MHZ),
            ClockRequest::new(133.0 * MHZ).with_tolerance(0.01),
            ClockRequest::new(25.0 * MHZ).with_tolerance_range(1e-6, 0.1),
        ];
        let solution = PllArch::Ecp5
            .create_pll(25.0 * MHZ, &requests, SearchMode::Sequential)
            .unwrap()
            .to_solution_file();

        let path = std::env::temp_dir().join(format!("pll-solution-{}.json", std::process::id()));
        write_solution_json(&path, &solution).unwrap();
        let loaded = read_solution_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.arch, PllArch::Ecp5);
        assert_eq!(loaded.requests, solution.requests);
        let config = loaded.config.expect("ecp5 solution carries a configuration");
        assert_eq!(
            verify(loaded.input_hz, &loaded.requests, &config, &PllLimits::ECP5),
            Ok(())
        );
    }

    #[test]
    fn missing_file_is_an_app_error() {
        let err = read_solution_json(Path::new("/nonexistent/pll.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
