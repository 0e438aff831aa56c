use super::super::state::{App, StatusKind};
use crate::i18n::Label;
use crate::settings::{Align, SettingUpdate};
use crate::todo::TodoId;
use iced::widget::text_editor;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_script_edited(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.editor.content.perform(action);
        if is_edit {
            let script = self.editor.script_text();
            self.apply_setting(SettingUpdate::Script(script));
        }
    }

    pub(super) fn handle_speed_changed(&mut self, speed: u32) {
        if self.settings.settings().speed == speed {
            return;
        }
        debug!(speed, "Scroll speed changed");
        self.apply_setting(SettingUpdate::Speed(speed));
    }

    pub(super) fn handle_font_size_changed(&mut self, size: u32) {
        if self.settings.settings().font_size == size {
            return;
        }
        debug!(font_size = size, "Font size changed");
        self.apply_setting(SettingUpdate::FontSize(size));
    }

    pub(super) fn handle_line_spacing_changed(&mut self, spacing: f32) {
        // Slider steps accumulate float error; keep one decimal.
        let spacing = (spacing * 10.0).round() / 10.0;
        if (self.settings.settings().line_spacing - spacing).abs() < f32::EPSILON {
            return;
        }
        debug!(line_spacing = spacing, "Line spacing changed");
        self.apply_setting(SettingUpdate::LineSpacing(spacing));
    }

    pub(super) fn handle_margin_changed(&mut self, margin: u32) {
        if self.settings.settings().margin == margin {
            return;
        }
        debug!(margin, "Side margin changed");
        self.apply_setting(SettingUpdate::Margin(margin));
    }

    pub(super) fn handle_align_selected(&mut self, align: Align) {
        debug!(?align, "Alignment changed");
        self.apply_setting(SettingUpdate::Align(align));
    }

    pub(super) fn handle_mirror_toggled(&mut self, mirror: bool) {
        debug!(mirror, "Mirror toggled");
        self.apply_setting(SettingUpdate::Mirror(mirror));
    }

    pub(super) fn handle_toggle_language(&mut self) {
        match self.settings.toggle_language(self.storage.as_mut()) {
            Ok(language) => info!(%language, "Switched interface language"),
            Err(err) => {
                warn!("Failed to persist language change: {err}");
                self.set_status(Label::StorageError, StatusKind::Error);
            }
        }
    }

    pub(super) fn handle_todo_toggled(&mut self, id: TodoId, done: bool) {
        if let Err(err) = self.todos.set(self.storage.as_mut(), id, done) {
            warn!(key = id.storage_key(), "Failed to persist todo flag: {err}");
            self.set_status(Label::StorageError, StatusKind::Error);
        }
        info!(
            completed = self.todos.completed(),
            total = TodoId::ALL.len(),
            "Todo progress"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::i18n::{Language, tr};
    use crate::settings::{STATE_KEY, SettingsStore};
    use crate::storage::{MemoryStorage, Storage, StorageError};
    use crate::todo::TodoList;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage shared with the test so writes made by the app can be inspected.
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<MemoryStorage>>);

    impl Storage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.borrow().get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().set_item(key, value)
        }
    }

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey {
                key: key.to_string(),
            })
        }
    }

    fn build_test_app(storage: SharedStorage) -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), Box::new(storage), None);
        app
    }

    #[test]
    fn slider_changes_persist_whole_settings() {
        let storage = SharedStorage::default();
        let mut app = build_test_app(storage.clone());

        let effects = app.reduce(Message::SpeedChanged(64));
        assert!(effects.is_empty());
        app.reduce(Message::FontSizeChanged(80));
        app.reduce(Message::LineSpacingChanged(2.0000002));
        app.reduce(Message::MarginChanged(12));
        app.reduce(Message::AlignSelected(Align::Left));
        app.reduce(Message::MirrorToggled(true));

        let reloaded = SettingsStore::load(&storage);
        assert_eq!(reloaded.settings(), app.settings.settings());
        assert_eq!(reloaded.settings().speed, 64);
        assert_eq!(reloaded.settings().line_spacing, 2.0);
        assert!(reloaded.settings().mirror);
    }

    #[test]
    fn script_edits_update_persisted_script() {
        let storage = SharedStorage::default();
        let mut app = build_test_app(storage.clone());

        app.reduce(Message::ScriptEdited(text_editor::Action::SelectAll));
        app.reduce(Message::ScriptEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("Hello studio".to_string())),
        )));

        assert_eq!(app.settings.settings().script, "Hello studio");
        let raw = storage.get_item(STATE_KEY).unwrap().expect("persisted");
        assert!(raw.contains("Hello studio"));
    }

    #[test]
    fn language_toggle_relabels_and_persists() {
        let storage = SharedStorage::default();
        let mut app = build_test_app(storage.clone());
        assert_eq!(app.title(), tr(Language::Bn, Label::Title));

        app.reduce(Message::ToggleLanguage);
        assert_eq!(app.title(), "Teleprompter");
        assert_eq!(SettingsStore::load(&storage).settings().language, Language::En);

        app.reduce(Message::ToggleLanguage);
        assert_eq!(app.language(), Language::Bn);
    }

    #[test]
    fn todo_toggle_writes_its_own_key() {
        let storage = SharedStorage::default();
        let mut app = build_test_app(storage.clone());
        app.reduce(Message::TodoToggled(TodoId::AdjustFontSize, true));

        assert_eq!(
            storage.get_item("todo_todo3").unwrap().as_deref(),
            Some("true")
        );
        assert!(TodoList::load(&storage).is_done(TodoId::AdjustFontSize));
    }

    #[test]
    fn storage_failure_is_shown_in_status_line() {
        let (mut app, _task) =
            App::bootstrap(AppConfig::default(), Box::new(ReadOnlyStorage), None);
        app.reduce(Message::MirrorToggled(true));

        assert!(app.settings.settings().mirror);
        let status = app.editor.status.expect("status shown");
        assert_eq!(status.label, Label::StorageError);
        assert_eq!(status.kind, StatusKind::Error);
    }
}
