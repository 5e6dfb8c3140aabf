//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the solver code stays clean and testable
//! - output changes are localized

use crate::arch::{Ecp5Output, port_outputs};
use crate::domain::{PllArch, SolutionFile, Tolerance};
use crate::limits::{PllLimits, format_hz};

/// Relative error to parts per million.
const PPM: f64 = 1e6;

/// Format a solved (or simulated) PLL as a summary plus an output table.
pub fn format_solution(solution: &SolutionFile) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== pll - {} PLL ===\n", solution.arch.display_name()));
    out.push_str(&format!("Input: {}\n", format_hz(solution.input_hz)));

    match &solution.config {
        Some(config) => {
            out.push_str(&format!(
                "Divisors: reference={} feedback={}\n",
                config.reference_div, config.feedback_div
            ));
            out.push_str(&format!(
                "Internal: PD={} VCO={}\n",
                format_hz(config.feedback_hz),
                format_hz(config.vco_hz)
            ));
            out.push_str(&format!("Total weighted error: {:.6e}\n", config.error));
        }
        None => out.push_str("Behavioral model: outputs are ideal\n"),
    }
    out.push('\n');

    out.push_str(
        format!(
            "{:<8} {:>16} {:>18} {:>5} {:>12} {:>24} {:>7}\n",
            "port", "requested", "achieved", "div", "error_ppm", "tolerance_ppm", "weight"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<8} {:-<16} {:-<18} {:-<5} {:-<12} {:-<24} {:-<7}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    let ports: Vec<Ecp5Output> = solution.config.as_ref().map(port_outputs).unwrap_or_default();

    for (index, (request, &achieved)) in solution.requests.iter().zip(&solution.outputs_hz).enumerate() {
        let port = ports.get(index);
        let divisor = port
            .map(|p| p.divisor.to_string())
            .unwrap_or_else(|| "-".to_string());

        out.push_str(
            format!(
                "{:<8} {:>16} {:>18} {:>5} {:>12.3} {:>24} {:>7.3}\n",
                port_name(solution.arch, port.map(|p| p.port), index),
                format_hz(request.frequency),
                format_hz(achieved),
                divisor,
                request.relative_error(achieved) * PPM,
                fmt_tolerance(request.tolerance),
                request.weight,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format a limits table.
pub fn format_limits(limits: &PllLimits) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} limits ===\n", limits.name));
    out.push_str(&format!("input     {}\n", limits.input));
    out.push_str(&format!("output    {}\n", limits.output));
    out.push_str(&format!("PD        {}\n", limits.feedback));
    out.push_str(&format!("VCO       {}\n", limits.vco));
    out.push_str(&format!("ref div   {}\n", limits.reference_div));
    out.push_str(&format!("fb div    {}\n", limits.feedback_div));
    out.push_str(&format!("out div   {}\n", limits.output_div));
    out.push_str(&format!("outputs   1..={}\n", limits.max_outputs));
    out
}

fn port_name(arch: PllArch, port: Option<&str>, index: usize) -> String {
    match (arch, port) {
        (PllArch::Ecp5, Some(port)) => port.to_string(),
        (PllArch::Ecp5, None) => format!("out{index}"),
        (PllArch::Sim, _) => format!("o_clk{index}"),
    }
}

fn fmt_tolerance(tolerance: Tolerance) -> String {
    match tolerance {
        Tolerance::Symmetric(t) => format!("±{}", fmt_ppm(t)),
        Tolerance::Asymmetric(below, above) => format!("[{}, {}]", fmt_ppm(below), fmt_ppm(above)),
    }
}

fn fmt_ppm(v: f64) -> String {
    let ppm = v * PPM;
    if ppm.fract() == 0.0 {
        format!("{ppm:.0}")
    } else {
        format!("{ppm:.3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockRequest, SearchMode};
    use crate::limits::MHZ;

    #[test]
    fn solution_table_lists_ports_and_divisors() {
        let requests = [ClockRequest::new(25.0 * MHZ), ClockRequest::new(75.0 * MHZ)];
        let solution = PllArch::Ecp5
            .create_pll(25.0 * MHZ, &requests, SearchMode::Sequential)
            .unwrap()
            .to_solution_file();

        let text = format_solution(&solution);
        assert!(text.contains("=== pll - ECP5 PLL ==="));
        assert!(text.contains("Divisors: reference=1 feedback=18"));
        assert!(text.contains("VCO=450 MHz"));
        assert!(text.contains("CLKOP"));
        assert!(text.contains("CLKOS"));
        assert!(!text.contains("CLKOS2"));

        // port, requested (2 tokens), achieved (2 tokens), divisor
        let row = text.lines().find(|l| l.starts_with("CLKOS ")).unwrap();
        assert_eq!(row.split_whitespace().nth(5), Some("6"));
    }

    #[test]
    fn sim_table_has_no_divisors() {
        let requests = [ClockRequest::new(25.0 * MHZ)];
        let solution = PllArch::Sim
            .create_pll(25.0 * MHZ, &requests, SearchMode::Sequential)
            .unwrap()
            .to_solution_file();

        let text = format_solution(&solution);
        assert!(text.contains("Behavioral model"));
        assert!(text.contains("o_clk0"));
    }

    #[test]
    fn tolerance_formats_in_ppm() {
        assert_eq!(fmt_tolerance(Tolerance::Symmetric(0.001)), "±1000");
        assert_eq!(fmt_tolerance(Tolerance::Asymmetric(-0.1, -1e-6)), "[-100000, -1]");
    }

    #[test]
    fn limits_table_shows_ecp5_windows() {
        let text = format_limits(&PllLimits::ECP5);
        assert!(text.contains("VCO       [400 MHz, 800 MHz]"));
        assert!(text.contains("output    [3.125 MHz, 400 MHz]"));
    }
}
