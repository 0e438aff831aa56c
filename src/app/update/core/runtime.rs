use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::import::load_script;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use std::time::Duration;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ImportScript(path) => {
                info!(path = %path.display(), "Dispatching script import task");
                let requested_path = path.clone();
                Task::perform(async move { load_script(&requested_path) }, move |result| {
                    Message::ImportFinished {
                        path: path.clone(),
                        result,
                    }
                })
            }
            Effect::ScheduleAutoplay { session } => {
                delayed(self.config.autoplay_delay_ms, Message::Autoplay(session))
            }
            Effect::ScheduleIndicatorHide { generation } => {
                delayed(self.config.indicator_ms, Message::HideIndicator(generation))
            }
            Effect::ScheduleStatusClear { generation } => {
                delayed(self.config.status_clear_ms, Message::ClearStatus(generation))
            }
        }
    }
}

fn delayed(millis: u64, message: Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            message
        },
        |message| message,
    )
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
