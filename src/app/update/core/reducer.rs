use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ScriptEdited(action) => self.handle_script_edited(action),
            Message::SpeedChanged(speed) => self.handle_speed_changed(speed),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::LineSpacingChanged(spacing) => self.handle_line_spacing_changed(spacing),
            Message::MarginChanged(margin) => self.handle_margin_changed(margin),
            Message::AlignSelected(align) => self.handle_align_selected(align),
            Message::MirrorToggled(mirror) => self.handle_mirror_toggled(mirror),
            Message::ToggleLanguage => self.handle_toggle_language(),
            Message::TodoToggled(id, done) => self.handle_todo_toggled(id, done),
            Message::ImportPathChanged(path) => self.handle_import_path_changed(path),
            Message::ImportRequested => self.handle_import_requested(&mut effects),
            Message::ImportFinished { path, result } => {
                self.handle_import_finished(path, result, &mut effects);
            }
            Message::ClearStatus(generation) => self.handle_clear_status(generation),
            Message::StartPrompter => self.handle_start_prompter(&mut effects),
            Message::GoBack => self.handle_go_back(),
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::Autoplay(session) => self.handle_autoplay(session, &mut effects),
            Message::HideIndicator(generation) => self.handle_hide_indicator(generation),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(_now) => self.handle_tick(),
        }

        effects
    }
}
