mod chart;
mod cmd;
mod output;
mod root;

use chart::ChartArgs;
use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, profile::ProfileSubcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bazi",
    about = "Daily fortune calendar: score each day's pillar against a natal chart",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .bazi/)
    #[arg(long, global = true, env = "BAZI_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize .bazi/ with a default config
    Init,

    /// Show the day pillar for a date (YYYY-MM-DD)
    Pillar { date: String },

    /// Evaluate a single day in detail
    Day {
        /// Date as YYYY-MM-DD
        date: String,
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Project every day of a month
    Month {
        /// Month as YYYY-MM
        month: String,
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// List the days of a month matching a tier or relationship filter
    KeyDates {
        /// Month as YYYY-MM
        month: String,
        /// advance, engage, observe, withdraw, authority, resource or wealth
        #[arg(long)]
        filter: String,
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Manage saved chart profiles
    Profile {
        #[command(subcommand)]
        subcommand: ProfileSubcommand,
    },

    /// Show or validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise only warnings and errors.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Pillar { date } => cmd::pillar::run(&date, cli.json),
        Commands::Day { date, chart } => cmd::day::run(&root, &date, &chart, cli.json),
        Commands::Month { month, chart } => cmd::month::run(&root, &month, &chart, cli.json),
        Commands::KeyDates {
            month,
            filter,
            chart,
        } => cmd::key_dates::run(&root, &month, &filter, &chart, cli.json),
        Commands::Profile { subcommand } => cmd::profile::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
