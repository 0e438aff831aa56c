mod messages;
mod prompter;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::storage::Storage;
use crate::theme::Theme;
use iced::{Size, window};
use std::path::PathBuf;

/// Launch the teleprompter window, optionally importing `startup_script`.
pub fn run_app(
    config: AppConfig,
    storage: Box<dyn Storage>,
    startup_script: Option<PathBuf>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(config, storage, startup_script))
}
