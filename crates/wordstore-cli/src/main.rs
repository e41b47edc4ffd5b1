use std::env;
use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordstore_db::WordNet;

use wordstore_cli::config::Config;
use wordstore_cli::{Cli, execute};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::resolve(cli.dict.clone(), cli.mode.as_deref(), |key| {
        env::var(key).ok()
    })?;
    info!(
        "using wordnet at {} (mode: {:?})",
        config.dict_dir.display(),
        config.mode
    );

    let start = Instant::now();
    let wordnet = WordNet::load_with_mode(&config.dict_dir, config.mode)
        .with_context(|| format!("loading WordNet from {}", config.dict_dir.display()))?;
    info!("wordnet loaded in {} ms", start.elapsed().as_millis());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &wordnet, &config.dict_dir, &mut out)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
