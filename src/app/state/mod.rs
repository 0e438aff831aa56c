mod constants;
mod editor;
mod prompter;

use crate::config::AppConfig;
use crate::i18n::{Label, Language, tr};
use crate::layout::PrompterLayout;
use crate::settings::{SettingUpdate, SettingsStore};
use crate::storage::Storage;
use crate::todo::TodoList;
use iced::{Size, Task};
use std::path::PathBuf;
use tracing::{info, warn};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use editor::EditorState;
pub(crate) use editor::{StatusKind, StatusLine};
pub(crate) use prompter::Indicator;
pub(in crate::app) use prompter::PrompterState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) storage: Box<dyn Storage>,
    pub(super) settings: SettingsStore,
    pub(super) todos: TodoList,
    pub(super) editor: EditorState,
    pub(super) prompter: PrompterState,
}

impl App {
    pub(super) fn bootstrap(
        mut config: AppConfig,
        storage: Box<dyn Storage>,
        startup_script: Option<PathBuf>,
    ) -> (App, Task<Message>) {
        config.sanitize();
        let settings = SettingsStore::load(storage.as_ref());
        let todos = TodoList::load(storage.as_ref());
        let editor = EditorState::new(&settings.settings().script);
        let prompter =
            PrompterState::new(Size::new(config.window_width, config.window_height));

        let mut app = App {
            config,
            storage,
            settings,
            todos,
            editor,
            prompter,
        };
        info!(
            language = %app.language(),
            script_chars = app.settings.settings().script.chars().count(),
            todos_done = app.todos.completed(),
            "Bootstrapped teleprompter"
        );

        let task = match startup_script {
            Some(path) => {
                app.editor.import_path = path.display().to_string();
                app.update(Message::ImportRequested)
            }
            None => Task::none(),
        };
        (app, task)
    }

    pub(super) fn title(&self) -> String {
        self.tr(Label::Title).to_string()
    }

    pub(super) fn language(&self) -> Language {
        self.settings.settings().language
    }

    pub(super) fn tr(&self, label: Label) -> &'static str {
        tr(self.language(), label)
    }

    /// Apply a settings change; a failed write is reported in the status line.
    pub(super) fn apply_setting(&mut self, update: SettingUpdate) -> bool {
        match self.settings.update(self.storage.as_mut(), update) {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to persist settings: {err}");
                self.set_status(Label::StorageError, StatusKind::Error);
                false
            }
        }
    }

    /// Replace the status line and return its generation.
    pub(super) fn set_status(&mut self, label: Label, kind: StatusKind) -> u64 {
        self.editor.status_generation += 1;
        self.editor.status = Some(StatusLine { label, kind });
        self.editor.status_generation
    }

    pub(super) fn script_is_blank(&self) -> bool {
        self.settings.settings().script.trim().is_empty()
    }

    /// Re-wrap the script for the current viewport width.
    pub(super) fn refresh_layout(&mut self) {
        let layout =
            PrompterLayout::for_settings(self.settings.settings(), self.prompter.viewport.width);
        tracing::debug!(
            lines = layout.lines.len(),
            text_height = layout.text_height(),
            viewport_width = self.prompter.viewport.width,
            "Laid out prompter text"
        );
        self.prompter.layout = Some(layout);
    }
}
