//! qising Command-Line Interface
//!
//! Evaluate, compile and plan k-local Ising problems for QAOA.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::OutputFormat;
use commands::{compile, energy, mixer, plan, unembed, version};

/// qising - k-local Ising problems compiled for QAOA
#[derive(Parser)]
#[command(name = "qising")]
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
    /// Evaluate the energy of a spin assignment
    Energy {
        /// Problem file (YAML or JSON)
        #[arg(short, long)]
        problem: PathBuf,

        /// Spins or 0/1 bits, comma separated (e.g. "1,-1,1" or "1,0,1")
        #[arg(short, long, allow_hyphen_values = true)]
        solution: String,
    },

    /// Compile a problem into cost and driver operators
    Compile {
        /// Problem file (YAML or JSON)
        #[arg(short, long)]
        problem: PathBuf,

        /// Physical qubit to leave unused
        #[arg(long, default_value = "3", conflicts_with = "no_reserve")]
        reserved_qubit: usize,

        /// Place variable i on qubit i
        #[arg(long)]
        no_reserve: bool,

        /// Bias lookup (logical, physical)
        #[arg(long, default_value = "logical")]
        bias_indexing: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the one-hot XY mixer
    Mixer {
        /// Number of one-hot qubits (multiple of 4)
        #[arg(short = 'n', long)]
        qubits: usize,

        /// Also mix the final move block
        #[arg(long)]
        include_final_move: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Map an embedded solution back to logical variables
    Unembed {
        /// Raw solution values in physical order, comma separated
        #[arg(short, long, allow_hyphen_values = true)]
        solution: String,

        /// Inverse embedding file mapping physical to logical (YAML or JSON)
        #[arg(short, long)]
        embedding: PathBuf,

        /// Convert bits to Ising spins (0 → +1, 1 → −1)
        #[arg(long)]
        ising: bool,
    },

    /// Build the QAOA request a backend would receive
    Plan {
        /// Problem file (YAML or JSON)
        #[arg(short, long)]
        problem: PathBuf,

        /// Solve options file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the step count
        #[arg(long)]
        steps: Option<usize>,

        /// Override the random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
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
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Energy { problem, solution } => energy::execute(&problem, &solution),

        Commands::Compile {
            problem,
            reserved_qubit,
            no_reserve,
            bias_indexing,
            format,
            output,
        } => {
            let reserved = (!no_reserve).then_some(reserved_qubit);
            OutputFormat::parse(&format).and_then(|format| {
                compile::execute(
                    &problem,
                    reserved,
                    &bias_indexing,
                    format,
                    output.as_deref(),
                )
            })
        }

        Commands::Mixer {
            qubits,
            include_final_move,
            format,
        } => OutputFormat::parse(&format)
            .and_then(|format| mixer::execute(qubits, include_final_move, format)),

        Commands::Unembed {
            solution,
            embedding,
            ising,
        } => unembed::execute(&solution, &embedding, ising),

        Commands::Plan {
            problem,
            config,
            steps,
            seed,
            output,
        } => plan::execute(
            &problem,
            config.as_deref(),
            steps,
            seed,
            output.as_deref(),
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
