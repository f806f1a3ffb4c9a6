//! QSO command-line interface.
//!
//! `qso run` drives a full feature-selection experiment: synthetic data,
//! bootstrap-sampled QUBO Hamiltonians, the layered ansatz on the
//! statevector engine, and the adaptive trust-region optimizer, with the
//! run persisted as JSON.  `qso plot` loads a persisted run back and
//! exports a plotting view.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{plot, run};

/// QSO - variational quantum optimization for feature selection
#[derive(Parser)]
#[command(name = "qso")]
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
    /// Run a feature-selection experiment
    Run {
        /// Number of real features
        #[arg(long = "k_real", default_value = "2")]
        k_real: usize,

        /// Number of fake features
        #[arg(long = "k_fake", default_value = "2")]
        k_fake: usize,

        /// Number of redundant features
        #[arg(long = "k_redundant", default_value = "2")]
        k_redundant: usize,

        /// Number of data samples to generate
        #[arg(long, default_value = "1024")]
        samples: usize,

        /// Fake-feature correlation strengths (one per fake feature)
        #[arg(long, num_args = 1..)]
        betas: Vec<f64>,

        /// Comma-separated data description: k_real response entries then
        /// the k_redundant x k_real redundant matrix, row-major
        #[arg(long = "data_description")]
        data_description: Option<String>,

        /// Redundancy/importance trade-off of the objective matrix
        #[arg(long, default_value = "0.5")]
        alpha: f64,

        /// Response noise scale
        #[arg(long, default_value = "1.0")]
        gamma: f64,

        /// Root random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Ansatz layer count
        #[arg(long, default_value_t = qso_problem::DEFAULT_LAYERS)]
        layers: usize,

        /// Optimizer iteration cap
        #[arg(long, default_value = "100")]
        max_iterations: usize,

        /// Starting shot budget per sampled Hamiltonian
        #[arg(long, default_value = "128")]
        shots_per_hamiltonian: u32,

        /// Hamiltonians sampled per cost estimate
        #[arg(long, default_value = "8")]
        samples_per_iteration: usize,

        /// Run-log output path (not persisted if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Ordinal of this run within an experiment series
        #[arg(long, default_value = "0")]
        run_number: u64,
    },

    /// Export a plotting view of a persisted run log
    Plot {
        /// Run-log file to load
        input: String,

        /// X-axis (iterations, shots)
        #[arg(short, long, default_value = "iterations")]
        axis: String,

        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
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
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            k_real,
            k_fake,
            k_redundant,
            samples,
            betas,
            data_description,
            alpha,
            gamma,
            seed,
            layers,
            max_iterations,
            shots_per_hamiltonian,
            samples_per_iteration,
            output,
            run_number,
        } => run::execute(run::RunArgs {
            k_real,
            k_fake,
            k_redundant,
            samples,
            betas,
            data_description,
            alpha,
            gamma,
            seed,
            layers,
            max_iterations,
            shots_per_hamiltonian,
            samples_per_iteration,
            output,
            run_number,
        }),

        Commands::Plot {
            input,
            axis,
            format,
            output,
        } => plot::execute(&input, &axis, &format, output.as_deref()),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
