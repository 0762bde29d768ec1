//! macrodeck - macro button engine tooling
//!
//! Usage:
//!   macrodeck bootstrap              → personal-server credentials and port as JSON
//!   macrodeck sort macros.json       → records in button order
//!   macrodeck duplicates macros.json → records sharing a logical identity
//!   macrodeck run macros.json        → what each record would submit
//!   macrodeck --dump-config          → default config as TOML

use anyhow::Context;
use clap::{Parser, Subcommand};
use macrodeck::config::{AppConfig, DEFAULT_CONFIG_FILE};
use macrodeck::{dry_run, report};
use macrodeck_core::legacy::load_records;
use macrodeck_core::{MacroDefaults, MacroRecord, Role};
use macrodeck_session::{SessionConfig, SharedRng};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "macrodeck",
    about = "Macro button engine tooling",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the default config as TOML and exit
    #[arg(long, default_value_t = false)]
    dump_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap a personal server session and print its settings
    Bootstrap {
        /// Seed for reproducible credentials and port choice
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print saved macros in button order
    Sort {
        /// JSON array of saved macro records
        file: PathBuf,
    },
    /// Report macros that duplicate an earlier one
    Duplicates {
        /// JSON array of saved macro records
        file: PathBuf,
    },
    /// Show what each saved macro would submit, without running anything
    Run {
        /// JSON array of saved macro records
        file: PathBuf,
        /// Run as a player instead of the GM
        #[arg(long, default_value_t = false)]
        player: bool,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default().to_toml());
        return Ok(());
    }

    init_tracing();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load(&config_path);
    let defaults = config.preferences.macro_defaults();

    match cli.command {
        Some(Commands::Bootstrap { seed }) => {
            let rng = seed.map(SharedRng::seeded).unwrap_or_default();
            let range = config.session.port_range()?;
            let session = SessionConfig::personal_async(range, rng).await?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        Some(Commands::Sort { file }) => {
            let mut records = read_records(&file, &defaults)?;
            for line in report::sorted_lines(&mut records) {
                println!("{}", line);
            }
        }
        Some(Commands::Duplicates { file }) => {
            let records = read_records(&file, &defaults)?;
            let duplicates = report::find_duplicates(&records);
            if duplicates.is_empty() {
                println!("No duplicates among {} macros", records.len());
            }
            for duplicate in duplicates {
                println!("{}", duplicate);
            }
        }
        Some(Commands::Run { file, player }) => {
            let records = read_records(&file, &defaults)?;
            let role = if player { Role::Player } else { Role::Gm };
            let outcome = dry_run::dry_run(&records, role);
            for line in &outcome.submissions {
                println!("{}", line);
            }
            if !outcome.input.is_empty() {
                println!("input: {}", outcome.input);
            }
            tracing::info!(
                "{} submitted, {} inserted, {} failed",
                outcome.summary.submitted,
                outcome.summary.inserted,
                outcome.summary.failed
            );
        }
        Some(Commands::Version) | None => {
            println!("macrodeck v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "macrodeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_records(path: &Path, defaults: &MacroDefaults) -> anyhow::Result<Vec<MacroRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records = load_records(&json, defaults)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}
