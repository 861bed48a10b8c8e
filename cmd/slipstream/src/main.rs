//! Slipstream CLI - race battle gap simulator.
//!
//! Commands:
//! - `slipstream simulate` - Run a battle simulation from session telemetry
//! - `slipstream report` - Write a markdown battle report
//! - `slipstream init` - Write an example session file

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "slipstream")]
#[command(about = "Race battle gap simulator modeling dirty air and tire decay")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Scenario selection shared by the simulate and report commands.
#[derive(Args)]
struct BattleArgs {
    /// Path to a session telemetry file (.json/.csv) or directory
    #[arg(short, long, default_value = "session.json")]
    session: String,

    /// Pursuing driver code (the car behind)
    #[arg(short, long)]
    pursuer: String,

    /// Target driver code (the car ahead)
    #[arg(short, long)]
    target: String,

    /// First lap of the simulation window
    #[arg(long)]
    start_lap: u32,

    /// Last lap of the window (defaults to the end of the stint)
    #[arg(long)]
    end_lap: Option<u32>,

    /// Gap in seconds at the start of the window (positive = pursuer behind)
    #[arg(long)]
    initial_gap: f64,

    /// Dirty air penalty in seconds per lap, charged to the target
    #[arg(long, default_value_t = stint_model::DEFAULT_DIRTY_AIR_PENALTY)]
    dirty_air: f64,

    /// Tire decay rate in seconds per lap, charged to the target
    #[arg(long, default_value_t = stint_model::DEFAULT_TIRE_DECAY_RATE)]
    tire_decay: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a battle between two drivers
    Simulate {
        #[command(flatten)]
        battle: BattleArgs,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a markdown battle report
    Report {
        #[command(flatten)]
        battle: BattleArgs,

        /// Output path for the report
        #[arg(short, long, default_value = "battle.md")]
        output: String,
    },

    /// Write an example session file for experimentation
    Init {
        /// Output path for the example session
        #[arg(default_value = "session.json")]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Simulate { battle, format } => commands::simulate::run(&battle, &format),
        Commands::Report { battle, output } => commands::report::run(&battle, &output),
        Commands::Init { path } => commands::init::run(&path),
    }
}
