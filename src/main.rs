use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use placeview::config::Config;
use placeview::favorites::FavoritesStore;
use placeview::ui::route::Route;
use placeview::ui::runtime;

/// Terminal browser for the JSONPlaceholder demo API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Route to open at startup, e.g. "/users/3" or "/favorites".
    #[arg(long, default_value = "/")]
    open: String,

    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file. The TUI owns the terminal, so
    /// logs never go to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let initial: Route = cli
        .open
        .parse()
        .with_context(|| format!("cannot open '{}'", cli.open))?;

    let favorites = FavoritesStore::load_or_default(config.favorites_path());

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime::run(&config, favorites, initial, tokio_runtime.handle().clone())
}

fn init_tracing(path: &std::path::Path) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
