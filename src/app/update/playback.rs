use super::super::state::{App, Indicator};
use super::Effect;
use crate::playback::TickOutcome;
use iced::Size;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_start_prompter(&mut self, effects: &mut Vec<Effect>) {
        if self.script_is_blank() {
            debug!("Ignoring start request for blank script");
            return;
        }
        if self.prompter.playback.in_display() {
            return;
        }
        self.refresh_layout();
        self.prompter
            .playback
            .enter_display(self.prompter.viewport.height);
        self.prompter.indicator = None;
        self.prompter.session += 1;
        info!(
            session = self.prompter.session,
            phase = ?self.prompter.playback.phase(),
            viewport_height = self.prompter.viewport.height,
            text_height = self.prompter.text_height(),
            "Started prompter"
        );
        effects.push(Effect::ScheduleAutoplay {
            session: self.prompter.session,
        });
    }

    pub(super) fn handle_go_back(&mut self) {
        if !self.prompter.playback.in_display() {
            return;
        }
        self.prompter.playback.exit_display();
        self.prompter.indicator = None;
        self.prompter.layout = None;
    }

    pub(super) fn handle_autoplay(&mut self, session: u64, effects: &mut Vec<Effect>) {
        if session != self.prompter.session {
            debug!(session, current = self.prompter.session, "Dropping stale autoplay");
            return;
        }
        let speed = self.settings.settings().speed;
        if self.prompter.playback.play(speed) {
            self.show_indicator(Indicator::Play, effects);
        }
    }

    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        let speed = self.settings.settings().speed;
        if self.prompter.playback.toggle(speed) {
            let indicator = if self.prompter.playback.is_playing() {
                Indicator::Play
            } else {
                Indicator::Pause
            };
            self.show_indicator(indicator, effects);
        }
    }

    pub(super) fn handle_hide_indicator(&mut self, generation: u64) {
        if generation == self.prompter.indicator_generation {
            self.prompter.indicator = None;
        }
    }

    pub(super) fn handle_tick(&mut self) {
        let text_height = self.prompter.text_height();
        if self.prompter.playback.tick(text_height) == TickOutcome::AutoPaused {
            debug!(offset = self.prompter.playback.offset(), "Auto-paused at end of script");
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.prompter.viewport = Size::new(width, height);
        if self.prompter.playback.in_display() {
            self.refresh_layout();
        }
    }

    fn show_indicator(&mut self, indicator: Indicator, effects: &mut Vec<Effect>) {
        self.prompter.indicator_generation += 1;
        self.prompter.indicator = Some(indicator);
        effects.push(Effect::ScheduleIndicatorHide {
            generation: self.prompter.indicator_generation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::playback::{Phase, Scheduler};
    use crate::storage::MemoryStorage;
    use std::time::{Duration, Instant};

    fn build_test_app(script: &str) -> App {
        let mut config = AppConfig::default();
        config.window_width = 800.0;
        config.window_height = 600.0;
        let (mut app, _task) = App::bootstrap(config, Box::new(MemoryStorage::new()), None);
        app.apply_setting(crate::settings::SettingUpdate::Script(script.to_string()));
        app
    }

    fn start_and_autoplay(app: &mut App) {
        let effects = app.reduce(Message::StartPrompter);
        let session = match effects.as_slice() {
            [Effect::ScheduleAutoplay { session }] => *session,
            other => panic!("unexpected effects: {other:?}"),
        };
        app.reduce(Message::Autoplay(session));
    }

    #[test]
    fn start_parks_text_below_viewport_and_schedules_autoplay() {
        let mut app = build_test_app("Line one\nLine two");
        let effects = app.reduce(Message::StartPrompter);

        assert_eq!(app.prompter.playback.phase(), Phase::Paused);
        assert_eq!(app.prompter.playback.offset(), 600);
        assert_eq!(effects, vec![Effect::ScheduleAutoplay { session: 1 }]);
    }

    #[test]
    fn blank_script_cannot_start() {
        let mut app = build_test_app("   \n  ");
        let effects = app.reduce(Message::StartPrompter);
        assert!(effects.is_empty());
        assert_eq!(app.prompter.playback.phase(), Phase::Idle);
    }

    #[test]
    fn autoplay_starts_timer_and_shows_indicator() {
        let mut app = build_test_app("Hello");
        app.reduce(Message::SpeedChanged(30));
        app.reduce(Message::StartPrompter);
        let effects = app.reduce(Message::Autoplay(1));

        assert!(app.prompter.playback.is_playing());
        assert_eq!(
            app.prompter.playback.scheduler().interval(),
            Some(Duration::from_millis(80))
        );
        assert_eq!(app.prompter.indicator, Some(Indicator::Play));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleIndicatorHide { .. }))
        );
    }

    #[test]
    fn stale_autoplay_from_earlier_session_is_ignored() {
        let mut app = build_test_app("Hello");
        app.reduce(Message::StartPrompter);
        app.reduce(Message::GoBack);
        app.reduce(Message::StartPrompter);

        let effects = app.reduce(Message::Autoplay(1));
        assert!(effects.is_empty());
        assert_eq!(app.prompter.playback.phase(), Phase::Paused);
    }

    #[test]
    fn toggle_flips_and_only_latest_indicator_hides() {
        let mut app = build_test_app("Hello");
        start_and_autoplay(&mut app);

        app.reduce(Message::TogglePlayPause);
        assert_eq!(app.prompter.playback.phase(), Phase::Paused);
        assert_eq!(app.prompter.indicator, Some(Indicator::Pause));

        let stale = app.prompter.indicator_generation - 1;
        app.reduce(Message::HideIndicator(stale));
        assert_eq!(app.prompter.indicator, Some(Indicator::Pause));

        let current = app.prompter.indicator_generation;
        app.reduce(Message::HideIndicator(current));
        assert_eq!(app.prompter.indicator, None);
    }

    #[test]
    fn ticks_scroll_until_script_leaves_screen() {
        let mut app = build_test_app("Hello");
        start_and_autoplay(&mut app);
        let text_height = app.prompter.text_height();
        assert!(text_height > 0.0);

        let needed = 600 + text_height.ceil() as usize + 1;
        for _ in 0..needed + 10 {
            app.reduce(Message::Tick(Instant::now()));
        }

        assert_eq!(app.prompter.playback.phase(), Phase::Paused);
        assert!((app.prompter.playback.offset() as f32) < -text_height);
        assert_eq!(app.prompter.playback.scheduler().interval(), None);
    }

    #[test]
    fn go_back_returns_to_editor_and_stops_timer() {
        let mut app = build_test_app("Hello");
        start_and_autoplay(&mut app);
        app.reduce(Message::GoBack);

        assert_eq!(app.prompter.playback.phase(), Phase::Idle);
        assert_eq!(app.prompter.playback.scheduler().interval(), None);
        assert!(app.prompter.layout.is_none());
    }

    #[test]
    fn resize_in_display_mode_rewraps_text() {
        let long_line = "word ".repeat(200);
        let mut app = build_test_app(&long_line);
        app.reduce(Message::StartPrompter);
        let wide_height = app.prompter.text_height();

        app.reduce(Message::WindowResized {
            width: 400.0,
            height: 600.0,
        });
        assert!(app.prompter.text_height() > wide_height);
    }

    #[test]
    fn toggle_is_ignored_in_editor() {
        let mut app = build_test_app("Hello");
        let effects = app.reduce(Message::TogglePlayPause);
        assert!(effects.is_empty());
        assert_eq!(app.prompter.playback.phase(), Phase::Idle);
    }
}
