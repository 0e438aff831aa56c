//! Persisted teleprompter settings.
//!
//! `SettingsStore` owns the single in-memory [`Settings`] record. Every
//! mutation goes through [`SettingsStore::update`], which writes the whole
//! record back to storage under [`STATE_KEY`] before returning. Loading is
//! lenient: each field is read independently, numeric strings are accepted,
//! out-of-range values are clamped and anything unusable falls back to the
//! default.

use crate::i18n::{Label, Language, tr};
use crate::storage::{Storage, StorageError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

pub const STATE_KEY: &str = "teleprompterState";

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 120;
pub const MIN_LINE_SPACING: f32 = 1.0;
pub const MAX_LINE_SPACING: f32 = 3.0;
pub const MIN_MARGIN: u32 = 0;
pub const MAX_MARGIN: u32 = 45;

const DEFAULT_SPEED: u32 = 20;
const DEFAULT_FONT_SIZE: u32 = 52;
const DEFAULT_LINE_SPACING: f32 = 1.5;
const DEFAULT_MARGIN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }

    pub fn label(self) -> Label {
        match self {
            Align::Left => Label::AlignLeft,
            Align::Center => Label::AlignCenter,
            Align::Right => Label::AlignRight,
        }
    }
}

/// Script text plus every user-adjustable display preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub script: String,
    pub speed: u32,
    pub font_size: u32,
    pub line_spacing: f32,
    pub margin: u32,
    pub align: Align,
    pub mirror: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::defaults_for(Language::default())
    }
}

impl Settings {
    /// First-run settings with the welcome script of `language`.
    pub fn defaults_for(language: Language) -> Self {
        Settings {
            script: tr(language, Label::DefaultScript).to_string(),
            speed: DEFAULT_SPEED,
            font_size: DEFAULT_FONT_SIZE,
            line_spacing: DEFAULT_LINE_SPACING,
            margin: DEFAULT_MARGIN,
            align: Align::default(),
            mirror: false,
            language,
        }
    }

    /// Build settings from a loosely-typed persisted object.
    fn from_loose(obj: &Map<String, Value>) -> Self {
        let language = obj
            .get("language")
            .and_then(Value::as_str)
            .and_then(Language::from_code)
            .unwrap_or_default();
        let defaults = Settings::defaults_for(language);

        Settings {
            script: obj
                .get("script")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.script),
            speed: loose_number(obj, "speed")
                .map(|v| clamp_u32(v, MIN_SPEED, MAX_SPEED))
                .unwrap_or(defaults.speed),
            font_size: loose_number(obj, "fontSize")
                .map(|v| clamp_u32(v, MIN_FONT_SIZE, MAX_FONT_SIZE))
                .unwrap_or(defaults.font_size),
            line_spacing: loose_number(obj, "lineSpacing")
                .map(|v| clamp_line_spacing(v as f32))
                .unwrap_or(defaults.line_spacing),
            margin: loose_number(obj, "margin")
                .map(|v| clamp_u32(v, MIN_MARGIN, MAX_MARGIN))
                .unwrap_or(defaults.margin),
            align: obj
                .get("align")
                .and_then(Value::as_str)
                .and_then(Align::from_code)
                .unwrap_or(defaults.align),
            mirror: loose_bool(obj, "mirror").unwrap_or(defaults.mirror),
            language,
        }
    }
}

/// A single-field mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingUpdate {
    Script(String),
    Speed(u32),
    FontSize(u32),
    LineSpacing(f32),
    Margin(u32),
    Align(Align),
    Mirror(bool),
    Language(Language),
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    /// Read the persisted record, or start from first-run defaults.
    pub fn load(storage: &dyn Storage) -> Self {
        let raw = match storage.get_item(STATE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to read persisted settings, using defaults: {err}");
                None
            }
        };

        let settings = match raw {
            None => {
                info!("No persisted settings; starting with defaults");
                Settings::default()
            }
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(obj)) => {
                    let settings = Settings::from_loose(&obj);
                    debug!(
                        speed = settings.speed,
                        font_size = settings.font_size,
                        language = %settings.language,
                        "Loaded persisted settings"
                    );
                    settings
                }
                Ok(other) => {
                    warn!(kind = json_kind(&other), "Persisted settings is not an object; ignoring");
                    Settings::default()
                }
                Err(err) => {
                    warn!("Persisted settings is not valid JSON; ignoring: {err}");
                    Settings::default()
                }
            },
        };

        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply one field change and persist the whole record.
    ///
    /// The in-memory value changes even when the write fails, matching a
    /// browser whose storage quota is exhausted: the session keeps working.
    pub fn update(
        &mut self,
        storage: &mut dyn Storage,
        update: SettingUpdate,
    ) -> Result<(), StorageError> {
        let s = &mut self.settings;
        match update {
            SettingUpdate::Script(script) => s.script = script,
            SettingUpdate::Speed(v) => s.speed = v.clamp(MIN_SPEED, MAX_SPEED),
            SettingUpdate::FontSize(v) => s.font_size = v.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            SettingUpdate::LineSpacing(v) => s.line_spacing = clamp_line_spacing(v),
            SettingUpdate::Margin(v) => s.margin = v.clamp(MIN_MARGIN, MAX_MARGIN),
            SettingUpdate::Align(align) => s.align = align,
            SettingUpdate::Mirror(mirror) => s.mirror = mirror,
            SettingUpdate::Language(language) => s.language = language,
        }
        self.save(storage)
    }

    /// Flip bn <-> en and persist.
    pub fn toggle_language(&mut self, storage: &mut dyn Storage) -> Result<Language, StorageError> {
        let next = self.settings.language.toggled();
        self.update(storage, SettingUpdate::Language(next))?;
        Ok(next)
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        // Settings holds only strings, integers, a finite float and enums.
        let json = serde_json::to_string(&self.settings).unwrap_or_else(|err| {
            warn!("Failed to serialize settings: {err}");
            String::from("{}")
        });
        storage.set_item(STATE_KEY, &json)
    }
}

fn loose_number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn loose_bool(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    match obj.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn clamp_u32(value: f64, min: u32, max: u32) -> u32 {
    value.round().clamp(min as f64, max as f64) as u32
}

fn clamp_line_spacing(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING)
    } else {
        DEFAULT_LINE_SPACING
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
