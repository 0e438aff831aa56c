//! Entry point for the teleprompter.
//!
//! Responsibilities here are intentionally minimal:
//! - Load user configuration from `conf/config.toml`.
//! - Open the key/value store that holds settings and checklist flags.
//! - Launch the GUI, importing a script passed on the command line.

mod app;
mod config;
mod i18n;
mod import;
mod layout;
mod playback;
mod settings;
mod storage;
mod theme;
mod todo;

use crate::app::run_app;
use crate::config::{ensure_config_file, load_config};
use crate::storage::FileStorage;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

const CONFIG_PATH: &str = "conf/config.toml";

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let startup_script = parse_args()?;
    let config_path = Path::new(CONFIG_PATH);
    if let Err(err) = ensure_config_file(config_path) {
        warn!("Could not create default config: {err:#}");
    }
    let config = load_config(config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        theme = %config.theme,
        "Starting teleprompter"
    );
    if let Some(path) = &startup_script {
        info!(path = %path.display(), "Importing script from command line");
    }

    let storage = FileStorage::new(&config.storage_dir);
    info!(root = %storage.root().display(), "Opened settings storage");
    run_app(config, Box::new(storage), startup_script).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };
    if args.next().is_some() {
        return Err(anyhow!(
            "Usage: teleprompter [script.pdf|script.docx]"
        ));
    }

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(Some(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
