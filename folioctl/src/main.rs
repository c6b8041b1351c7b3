use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_config::{ConfigLoad, ConfigLoader};
use folio_model::CategoryFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod play;
mod report;
mod simulate;

#[derive(Parser)]
#[command(
    name = "folioctl",
    version,
    about = "Inspect the Folio catalog and replay widget timelines"
)]
struct Cli {
    /// Presentation config file (TOML or JSON); skips the environment lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// .env file to load before reading FOLIO_* variables
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the photos the gallery would show
    Catalog {
        /// Category slug (bodas, retrato, familia, calle, producto, varios) or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Case-insensitive text matched against titles and file names
        #[arg(long)]
        search: Option<String>,
        /// Print the matching items as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the gallery filter buttons
    Categories,
    /// Replay a widget timeline in virtual time
    Simulate {
        #[arg(long, value_enum, default_value = "hero")]
        surface: SurfaceArg,
        /// Virtual time to replay, e.g. "30s" or "2m"
        #[arg(long = "for", value_parser = humantime::parse_duration, default_value = "30s")]
        duration: Duration,
        /// Start autoplay even when the surface does not by default
        #[arg(long)]
        autoplay: bool,
        /// Seed for the hero shuffle
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Run a carousel in real time, printing each slide change
    Play {
        #[arg(long, value_enum, default_value = "hero")]
        surface: SurfaceArg,
        #[arg(long = "for", value_parser = humantime::parse_duration, default_value = "15s")]
        duration: Duration,
        /// Start autoplay even when the surface does not by default
        #[arg(long)]
        autoplay: bool,
    },
    /// Validate configuration and report warnings
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurfaceArg {
    Hero,
    Fullscreen,
    Lightbox,
}

impl SurfaceArg {
    pub fn settings(self, load: &ConfigLoad) -> folio_config::SurfaceSettings {
        match self {
            SurfaceArg::Hero => load.config.hero,
            SurfaceArg::Fullscreen => load.config.fullscreen,
            SurfaceArg::Lightbox => load.config.lightbox,
        }
    }
}

fn load_config(cli: &Cli) -> Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    match &cli.env_file {
        Some(path) => loader = loader.with_env_file(path),
        None => {
            dotenvy::dotenv().ok();
        }
    }
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let load = loader.load().context("failed to load configuration")?;
    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => tracing::warn!(hint = %hint, "{}", warning.message),
            None => tracing::warn!("{}", warning.message),
        }
    }
    Ok(load)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let load = load_config(&cli)?;

    match cli.command {
        Command::Catalog {
            category,
            search,
            json,
        } => report::catalog(&load, category, search.as_deref(), json),
        Command::Categories => report::categories(&load),
        Command::Simulate {
            surface,
            duration,
            autoplay,
            seed,
        } => simulate::run(&load, surface, duration, autoplay, seed),
        Command::Play {
            surface,
            duration,
            autoplay,
        } => play::run(&load, surface, duration, autoplay).await,
        Command::Check => report::check(&load),
    }
}
