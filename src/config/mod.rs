//! Configuration loading for the teleprompter.
//!
//! Application-level settings (window geometry, logging, storage location,
//! key bindings, cosmetic timings) are loaded from `conf/config.toml` if
//! present. Any missing or invalid entries fall back to sensible defaults so
//! the UI can still launch. User-facing display preferences are not stored
//! here; see `crate::settings`.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{ensure_config_file, load_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
