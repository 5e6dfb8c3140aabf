//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the solve pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, SolveArgs, VerifyArgs};
use crate::domain::SolveConfig;
use crate::error::AppError;
use crate::limits::PllLimits;

pub mod pipeline;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PLL_LOG";

/// Entry point for the `pll` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve(args) => handle_solve(args),
        Command::Verify(args) => handle_verify(args),
        Command::Limits => {
            println!("{}", crate::report::format_limits(&PllLimits::ECP5));
            Ok(())
        }
    }
}

/// Log filter from `PLL_LOG` (a `.env` file is honoured), else from `-v`.
fn init_logging(verbose: u8) {
    dotenvy::dotenv().ok();

    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::new(directive),
        Err(_) => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_solve(args: SolveArgs) -> Result<(), AppError> {
    let config = solve_config_from_args(&args);
    let solution = pipeline::run_solve(&config)?;

    if config.json {
        let text = serde_json::to_string_pretty(&solution)
            .map_err(|e| AppError::new(2, format!("Failed to encode solution JSON: {e}")))?;
        println!("{text}");
    } else {
        println!("{}", crate::report::format_solution(&solution));
    }

    if let Some(path) = &config.export {
        crate::io::write_solution_json(path, &solution)?;
        info!(path = %path.display(), "exported solution");
    }

    Ok(())
}

fn handle_verify(args: VerifyArgs) -> Result<(), AppError> {
    let solution = crate::io::read_solution_json(&args.solution)?;

    match pipeline::verify_solution(&solution) {
        Ok(()) => {
            println!("{}: OK", args.solution.display());
            Ok(())
        }
        Err(err) => {
            warn!(path = %args.solution.display(), "solution failed verification");
            Err(err)
        }
    }
}

pub fn solve_config_from_args(args: &SolveArgs) -> SolveConfig {
    SolveConfig {
        arch: args.arch,
        input_hz: args.input,
        requests: args.outputs.clone(),
        search: args.search,
        json: args.json,
        export: args.export.clone(),
    }
}
