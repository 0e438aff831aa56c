use super::super::state::{App, StatusKind};
use super::Effect;
use crate::i18n::Label;
use crate::import::ImportError;
use crate::settings::SettingUpdate;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_import_path_changed(&mut self, path: String) {
        self.editor.import_path = path;
    }

    pub(super) fn handle_import_requested(&mut self, effects: &mut Vec<Effect>) {
        let raw = self.editor.import_path.trim();
        if raw.is_empty() || self.editor.importing {
            return;
        }
        let path = PathBuf::from(raw);
        self.editor.importing = true;
        self.set_status(Label::FileProcessing, StatusKind::Info);
        effects.push(Effect::ImportScript(path));
    }

    pub(super) fn handle_import_finished(
        &mut self,
        path: PathBuf,
        result: Result<String, ImportError>,
        effects: &mut Vec<Effect>,
    ) {
        self.editor.importing = false;
        match result {
            Ok(script) => {
                info!(
                    path = %path.display(),
                    chars = script.chars().count(),
                    "Replaced script with imported text"
                );
                self.editor.replace_script(&script);
                if !self.apply_setting(SettingUpdate::Script(script)) {
                    return;
                }
                let generation = self.set_status(Label::FileSuccess, StatusKind::Success);
                effects.push(Effect::ScheduleStatusClear { generation });
            }
            Err(err) => {
                warn!(path = %path.display(), "Script import failed: {err}");
                self.set_status(err.user_label(), StatusKind::Error);
            }
        }
    }

    pub(super) fn handle_clear_status(&mut self, generation: u64) {
        if generation == self.editor.status_generation {
            self.editor.status = None;
        }
    }
}
