use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_indicator_ms")]
    pub indicator_ms: u64,
    #[serde(default = "crate::config::defaults::default_status_clear_ms")]
    pub status_clear_ms: u64,
    #[serde(default = "crate::config::defaults::default_key_toggle_play_pause")]
    pub key_toggle_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_go_back")]
    pub key_go_back: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            storage_dir: crate::config::defaults::default_storage_dir(),
            log_level: crate::config::defaults::default_log_level(),
            autoplay_delay_ms: crate::config::defaults::default_autoplay_delay_ms(),
            indicator_ms: crate::config::defaults::default_indicator_ms(),
            status_clear_ms: crate::config::defaults::default_status_clear_ms(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_go_back: crate::config::defaults::default_key_go_back(),
        }
    }
}

impl AppConfig {
    /// Clamp out-of-range values and normalize key bindings in place.
    pub fn sanitize(&mut self) {
        fn normalize_key_binding(value: &mut String, fallback: String) {
            let normalized = value.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                *value = fallback;
            } else {
                *value = normalized;
            }
        }

        self.window_width = if self.window_width.is_finite() {
            self.window_width.clamp(320.0, 7680.0)
        } else {
            crate::config::defaults::default_window_width()
        };
        self.window_height = if self.window_height.is_finite() {
            self.window_height.clamp(240.0, 4320.0)
        } else {
            crate::config::defaults::default_window_height()
        };
        if self.storage_dir.trim().is_empty() {
            self.storage_dir = crate::config::defaults::default_storage_dir();
        }
        self.autoplay_delay_ms = self.autoplay_delay_ms.min(10_000);
        self.indicator_ms = self.indicator_ms.clamp(50, 5_000);
        self.status_clear_ms = self.status_clear_ms.clamp(250, 60_000);
        normalize_key_binding(&mut self.key_toggle_play_pause, "space".to_string());
        normalize_key_binding(&mut self.key_go_back, "escape".to_string());
    }
}

/// Theme used for the editor view. Display mode is always white on black.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
