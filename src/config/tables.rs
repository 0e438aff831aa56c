use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`, grouped into sections.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    playback: PlaybackConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            storage_dir: tables.storage.dir,
            log_level: tables.logging.log_level,
            autoplay_delay_ms: tables.playback.autoplay_delay_ms,
            indicator_ms: tables.playback.indicator_ms,
            status_clear_ms: tables.playback.status_clear_ms,
            key_toggle_play_pause: tables.keys.toggle_play_pause,
            key_go_back: tables.keys.go_back,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            storage: StorageConfig {
                dir: config.storage_dir.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            playback: PlaybackConfig {
                autoplay_delay_ms: config.autoplay_delay_ms,
                indicator_ms: config.indicator_ms,
                status_clear_ms: config.status_clear_ms,
            },
            keys: KeysConfig {
                toggle_play_pause: config.key_toggle_play_pause.clone(),
                go_back: config.key_go_back.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_storage_dir")]
    dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            dir: defaults::default_storage_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PlaybackConfig {
    #[serde(default = "defaults::default_autoplay_delay_ms")]
    autoplay_delay_ms: u64,
    #[serde(default = "defaults::default_indicator_ms")]
    indicator_ms: u64,
    #[serde(default = "defaults::default_status_clear_ms")]
    status_clear_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            autoplay_delay_ms: defaults::default_autoplay_delay_ms(),
            indicator_ms: defaults::default_indicator_ms(),
            status_clear_ms: defaults::default_status_clear_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_play_pause")]
    toggle_play_pause: String,
    #[serde(default = "defaults::default_key_go_back")]
    go_back: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_play_pause: defaults::default_key_toggle_play_pause(),
            go_back: defaults::default_key_go_back(),
        }
    }
}
