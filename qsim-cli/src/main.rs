//! qsim - dense quantum circuit simulator
//! Command-line demonstrations driving the state engine

mod config;
mod demos;

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use qsim_state::Measurer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demos::deutsch::Oracle;

#[derive(Parser)]
#[command(name = "qsim")]
#[command(author = "Silvano Neto")]
#[command(version = "2026.1.16")]
#[command(about = "qsim - dense matrix quantum circuit simulator", long_about = None)]
struct Cli {
    /// Seed for measurement sampling (overrides QSIM_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deutsch: constant or balanced 1-bit oracle in one query
    Deutsch {
        /// Oracle to test (random when omitted)
        #[arg(short, long, value_enum)]
        oracle: Option<Oracle>,
    },

    /// Deutsch-Jozsa: constant or balanced n-bit oracle
    DeutschJozsa {
        /// Number of input bits
        #[arg(short, long, default_value_t = 5)]
        bits: usize,

        /// Force a balanced (true) or constant (false) oracle
        #[arg(long)]
        balanced: Option<bool>,
    },

    /// Bell pair: repeated measurements always agree
    Bell {
        /// Number of consecutive measurements
        #[arg(short, long, default_value_t = 4)]
        repeats: usize,
    },

    /// Measure one qubit of an entangled 4-qubit register
    MeasureAny {
        /// Qubit to measure
        #[arg(short, long, default_value_t = 1)]
        qubit: usize,
    },

    /// Grover search for a single marked element
    Grover {
        /// Number of search bits
        #[arg(short, long, default_value_t = 6)]
        bits: usize,

        /// Marked element (random when omitted)
        #[arg(short, long)]
        secret: Option<usize>,
    },

    /// Simon: recover the hidden XOR mask
    Simon {
        /// Number of input bits
        #[arg(short, long, default_value_t = 3)]
        bits: usize,

        /// Hidden mask (random non-zero when omitted)
        #[arg(short, long)]
        secret: Option<usize>,
    },

    /// Shor: factor N through quantum period finding
    Shor {
        /// Composite number to factor
        #[arg(value_name = "N", default_value_t = 15)]
        number: u64,

        /// Input register size (defaults to the output size; input plus
        /// output qubits are capped at 10)
        #[arg(long)]
        input_bits: Option<usize>,

        /// Fixed coprime base (random per attempt when omitted)
        #[arg(long)]
        base: Option<u64>,
    },

    /// Time naive versus closed-form H^n construction
    BenchHn {
        /// Number of qubits
        #[arg(short, long, default_value_t = 5)]
        bits: usize,

        /// Constructions per strategy
        #[arg(short, long, default_value_t = 1000)]
        iterations: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed = cli.seed.or(*config::SEED);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let measurer = Measurer::with_config(config::measurement_config());
    debug!(?seed, config = ?measurer.config(), "simulator configured");

    match cli.command {
        Commands::Deutsch { oracle } => {
            let report = demos::deutsch::run(oracle, &measurer, &mut rng)
                .context("Deutsch demonstration failed")?;
            emit("Deutsch", &report, cli.json)
        }

        Commands::DeutschJozsa { bits, balanced } => {
            let report = demos::deutsch_jozsa::run(bits, balanced, &measurer, &mut rng)
                .context("Deutsch-Jozsa demonstration failed")?;
            emit("Deutsch-Jozsa", &report, cli.json)
        }

        Commands::Bell { repeats } => {
            let report = demos::bell::run(repeats, &measurer, &mut rng)
                .context("Bell demonstration failed")?;
            emit("Bell pair", &report, cli.json)
        }

        Commands::MeasureAny { qubit } => {
            let report = demos::measure_any::run(qubit, &measurer, &mut rng)
                .with_context(|| format!("measuring qubit {qubit} failed"))?;
            emit("Measure any qubit", &report, cli.json)
        }

        Commands::Grover { bits, secret } => {
            let report = demos::grover::run(bits, secret, &measurer, &mut rng)
                .context("Grover search failed")?;
            emit("Grover", &report, cli.json)
        }

        Commands::Simon { bits, secret } => {
            let report = demos::simon::run(bits, secret, &measurer, &mut rng)
                .context("Simon demonstration failed")?;
            emit("Simon", &report, cli.json)
        }

        Commands::Shor {
            number,
            input_bits,
            base,
        } => {
            let report = demos::shor::run(number, input_bits, base, &measurer, &mut rng)
                .with_context(|| format!("factoring {number} failed"))?;
            emit("Shor", &report, cli.json)
        }

        Commands::BenchHn { bits, iterations } => {
            let report = demos::bench_hn::run(bits, iterations).context("H^n benchmark failed")?;
            emit("H^n construction", &report, cli.json)
        }
    }
}

fn emit<T: Serialize + Display>(title: &str, report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{} {}", "Running".green().bold(), title.cyan());
        println!("{report}");
        println!("{}", "    Finished".green().bold());
    }
    Ok(())
}
