use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod modules;
mod utilities;

/// Headless multi-car elevator simulation.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Simulation settings (JSON). Defaults are used when the file is missing.
    #[arg(long, short, default_value = "config.json")]
    pub config: PathBuf,

    /// Scripted cab presses and hall calls (JSON).
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,

    /// Stop after this many seconds. Runs until killed when absent.
    #[arg(long, short)]
    pub duration_secs: Option<u64>,

    /// Overrides the number of cars from the config file.
    #[arg(long, short)]
    pub num_cars: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match modules::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
