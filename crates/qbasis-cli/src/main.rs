//! qbasis Command-Line Interface
//!
//! The main entry point for the qbasis CLI tool.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qbasis_ir::{MeasurementBasis, PreparedState};
use qbasis_runner::DEFAULT_SHOTS;

mod commands;

use commands::common::OutputFormat;
use commands::{exercises, run, suite, version};

/// qbasis - single-qubit state preparation and basis measurement
#[derive(Parser)]
#[command(name = "qbasis")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare a state, measure it in a basis and show the histogram
    Run {
        /// Prepared state (plus, minus)
        #[arg(long, default_value = "plus")]
        state: PreparedState,

        /// Measurement basis (z, x, y)
        #[arg(short, long, default_value = "z")]
        basis: MeasurementBasis,

        /// Number of shots
        #[arg(short, long, default_value_t = DEFAULT_SHOTS, env = "QBASIS_SHOTS", allow_negative_numbers = true)]
        shots: i64,

        /// Seed for reproducible sampling
        #[arg(long, env = "QBASIS_SEED")]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run the three basis-measurement exercises
    Exercises {
        /// Report files, one per exercise in order
        outputs: Vec<PathBuf>,

        /// Number of shots per circuit
        #[arg(short, long, default_value_t = DEFAULT_SHOTS, env = "QBASIS_SHOTS", allow_negative_numbers = true)]
        shots: i64,

        /// Seed for reproducible sampling
        #[arg(long, env = "QBASIS_SEED")]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Sample circuits concurrently
        #[arg(long)]
        concurrent: bool,
    },

    /// Run experiments described in a YAML suite file
    Suite {
        /// Suite file
        #[arg(short, long)]
        config: PathBuf,

        /// Seed overriding the suite's own
        #[arg(long, env = "QBASIS_SEED")]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Sample circuits concurrently
        #[arg(long)]
        concurrent: bool,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            state,
            basis,
            shots,
            seed,
            format,
        } => run::execute(state, basis, shots, seed, format),

        Commands::Exercises {
            outputs,
            shots,
            seed,
            format,
            concurrent,
        } => exercises::execute(&outputs, shots, seed, format, concurrent).await,

        Commands::Suite {
            config,
            seed,
            format,
            concurrent,
        } => suite::execute(&config, seed, format, concurrent).await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
