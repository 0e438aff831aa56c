use crate::import::ImportError;
use crate::settings::Align;
use crate::todo::TodoId;
use iced::keyboard::{Key, Modifiers};
use iced::widget::text_editor;
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ScriptEdited(text_editor::Action),
    SpeedChanged(u32),
    FontSizeChanged(u32),
    LineSpacingChanged(f32),
    MarginChanged(u32),
    AlignSelected(Align),
    MirrorToggled(bool),
    ToggleLanguage,
    TodoToggled(TodoId, bool),
    ImportPathChanged(String),
    ImportRequested,
    ImportFinished {
        path: PathBuf,
        result: Result<String, ImportError>,
    },
    ClearStatus(u64),
    StartPrompter,
    GoBack,
    TogglePlayPause,
    Autoplay(u64),
    HideIndicator(u64),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
