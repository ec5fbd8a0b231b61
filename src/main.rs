use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use authgate::config::{api_key_from_env, Config, API_KEY_ENV};
use authgate::logging::init_tracing;
use authgate::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "authgate", version, about = "Terminal login / sign-up client")]
struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Resolve the secret before touching the terminal so a missing key is a
    // plain fatal error on stderr, not a garbled alternate screen.
    let api_key = api_key_from_env()
        .with_context(|| format!("set {API_KEY_ENV} before starting"))?;

    tracing::info!(base_url = %config.base_url, "starting authgate");
    runtime::run(&config, api_key)
}
