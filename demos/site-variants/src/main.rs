//! Site variants demo
//!
//! Reads a site request (TOML or JSON), generates ranked floor-plate
//! variants and prints the report as JSON.
//!
//! Run with: cargo run -p site-variants -- demos/site-variants/request.toml --seed 7
//!
//! Set `RUST_LOG=plateforge_generator=debug` to follow individual attempts.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use plateforge::{
    generate_floor_plate_variants, load_config, ConfigError, GenerationRequest, PlateForgeConfig,
    PlateForgeError, RegulationConstraints, SitePolygon,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "site-variants", version, about)]
struct Cli {
    /// Site request file (.toml or .json)
    request: PathBuf,

    /// PlateForge configuration file (defaults to ./plateforge.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible fallback draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

/// A site boundary plus the generation request; regulations in the file
/// override those from the configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteRequest {
    site: SitePolygon,
    #[serde(flatten)]
    request: GenerationRequest,
    #[serde(default)]
    regulations: Option<RegulationConstraints>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML request: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] PlateForgeError),
}

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => PlateForgeConfig::load(path)?,
        None => load_config(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }

    let site_request = read_request(&cli.request)?;
    if let Some(regulations) = site_request.regulations {
        config = config.with_regulations(regulations);
    }

    let report = generate_floor_plate_variants(site_request.site, &site_request.request, &config)?;
    info!(
        event = "report",
        status = ?report.status,
        variants = report.variants.len(),
        message = %report.message,
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn read_request(path: &Path) -> Result<SiteRequest, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(toml::from_str(&text)?)
    }
}
