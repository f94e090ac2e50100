/*
caristat - single-binary main.rs
This binary runs one keyword search against the BPS Kota Medan website and
prints the matching links as a JSON array on stdout. Logs go to stderr.
*/

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use common::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use caristat::catalog;
use caristat::search::Searcher;

#[derive(Parser, Debug)]
#[command(
    name = "caristat",
    version,
    about = "Link search for the BPS Kota Medan website"
)]
struct Args {
    /// Keyword to search for (Indonesian statistical terms work best)
    keyword: String,

    /// Path to caristat.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of links to emit
    #[arg(long, value_name = "N")]
    max_results: Option<usize>,

    /// Serve curated links when the live search finds nothing
    #[arg(long)]
    fallback: bool,

    /// Serve curated links only, without touching the network
    #[arg(long)]
    offline: bool,

    /// Override log level (info, debug, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args. A missing keyword exits with code 1; help and version
    // requests keep clap's exit code 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize logging on stderr; stdout carries only the JSON payload.
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Resolve config path: an explicit --config must exist, otherwise pick
    // up caristat.toml from the working directory when present.
    let config_path = if let Some(p) = args.config {
        if !p.exists() {
            error!(path = ?p, "specified config file not found");
            return Err(anyhow::anyhow!("Config file not found: {}", p.display()));
        }
        Some(p)
    } else {
        let p = PathBuf::from("caristat.toml");
        if p.exists() {
            Some(p)
        } else {
            None
        }
    };

    let config = match config_path {
        Some(ref path) => match Config::from_file(path).await {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(%e, "failed to load configuration");
                return Err(e);
            }
        },
        None => Config::default(),
    };

    let max_results = args.max_results.unwrap_or_else(|| config.max_results());

    info!("searching for: {}", args.keyword);

    let mut results = if args.offline {
        info!("offline mode: skipping live search");
        Vec::new()
    } else {
        let searcher = Searcher::new(&config)?;
        searcher.search_links(&args.keyword, max_results).await
    };

    if results.is_empty() && (args.fallback || args.offline) {
        info!("serving curated links for '{}'", args.keyword);
        results = catalog::curated_for(&args.keyword).unwrap_or_else(catalog::default_links);
        results.truncate(max_results);
    }

    let json = serde_json::to_string_pretty(&results).context("failed to serialize results")?;
    println!("{}", json);

    Ok(())
}
