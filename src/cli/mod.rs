//! Command-line parsing for the PLL solver.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! solver code. Value parsers for frequencies and clock requests live here too.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{ClockRequest, PllArch, SearchMode, Tolerance};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pll", version, about = "PLL divisor solver for FPGA clock generators")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `PLL_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve divisors for an input clock and up to three output clocks.
    Solve(SolveArgs),
    /// Re-check a previously exported solution JSON.
    Verify(VerifyArgs),
    /// Print the hardware limits used by the solver.
    Limits,
}

/// Options for solving.
#[derive(Debug, Parser, Clone)]
pub struct SolveArgs {
    /// Input reference clock (e.g. `25MHz`, `12e6`).
    #[arg(short, long, value_parser = parse_frequency)]
    pub input: f64,

    /// Output clock request `FREQ[:TOL][@WEIGHT]`; TOL is `t` or `below,above`.
    ///
    /// Examples: `25MHz`, `133MHz:0.01`, `25MHz:-0.1,-1e-6@2`.
    #[arg(short, long = "out", value_parser = parse_clock_request, required = true)]
    pub outputs: Vec<ClockRequest>,

    /// Generator variant.
    #[arg(long, value_enum, default_value_t = PllArch::Ecp5)]
    pub arch: PllArch,

    /// Divisor search strategy.
    #[arg(long, value_enum, default_value_t = SearchMode::Sequential)]
    pub search: SearchMode,

    /// Print the solution as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Export the solution to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for verifying a saved solution.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Solution JSON produced by `pll solve --export`.
    #[arg(long, value_name = "JSON")]
    pub solution: PathBuf,
}

/// Parse a frequency with an optional `Hz` / `kHz` / `MHz` suffix.
pub fn parse_frequency(s: &str) -> Result<f64, String> {
    let t = s.trim();
    let lower = t.to_ascii_lowercase();
    let (number, scale) = if let Some(n) = lower.strip_suffix("mhz") {
        (n, 1e6)
    } else if let Some(n) = lower.strip_suffix("khz") {
        (n, 1e3)
    } else if let Some(n) = lower.strip_suffix("hz") {
        (n, 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid frequency '{t}'"))?;
    let hz = value * scale;
    if !(hz.is_finite() && hz > 0.0) {
        return Err(format!("frequency must be finite and > 0, got '{t}'"));
    }
    Ok(hz)
}

/// Parse `FREQ[:TOL][@WEIGHT]`.
pub fn parse_clock_request(s: &str) -> Result<ClockRequest, String> {
    let (rest, weight) = match s.split_once('@') {
        Some((rest, w)) => {
            let w: f64 = w.trim().parse().map_err(|_| format!("invalid weight '{w}'"))?;
            (rest, Some(w))
        }
        None => (s, None),
    };

    let (freq, tolerance) = match rest.split_once(':') {
        Some((freq, tol)) => (freq, Some(parse_tolerance(tol)?)),
        None => (rest, None),
    };

    let mut request = ClockRequest::new(parse_frequency(freq)?);
    if let Some(tolerance) = tolerance {
        request.tolerance = tolerance;
    }
    if let Some(weight) = weight {
        request = request.with_weight(weight);
    }
    Ok(request)
}

fn parse_tolerance(s: &str) -> Result<Tolerance, String> {
    let parse = |v: &str| -> Result<f64, String> {
        v.trim().parse::<f64>().map_err(|_| format!("invalid tolerance '{s}'"))
    };
    match s.split_once(',') {
        Some((below, above)) => Ok(Tolerance::Asymmetric(parse(below)?, parse(above)?)),
        None => Ok(Tolerance::Symmetric(parse(s)?)),
    }
}
