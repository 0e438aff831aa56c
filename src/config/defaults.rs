pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_storage_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_autoplay_delay_ms() -> u64 {
    500
}

pub(crate) fn default_indicator_ms() -> u64 {
    500
}

pub(crate) fn default_status_clear_ms() -> u64 {
    3_000
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_go_back() -> String {
    "escape".to_string()
}
