use crate::layout::PrompterLayout;
use crate::playback::{PlaybackController, TimerHandle};
use iced::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    Play,
    Pause,
}

pub(in crate::app) struct PrompterState {
    pub(in crate::app) playback: PlaybackController<TimerHandle>,
    pub(in crate::app) layout: Option<PrompterLayout>,
    pub(in crate::app) viewport: Size,
    /// Incremented on every entry into display mode; a pending autoplay only
    /// fires for the session it was scheduled in.
    pub(in crate::app) session: u64,
    pub(in crate::app) indicator: Option<Indicator>,
    pub(in crate::app) indicator_generation: u64,
}

impl PrompterState {
    pub(in crate::app) fn new(viewport: Size) -> Self {
        Self {
            playback: PlaybackController::default(),
            layout: None,
            viewport,
            session: 0,
            indicator: None,
            indicator_generation: 0,
        }
    }

    pub(in crate::app) fn text_height(&self) -> f32 {
        self.layout
            .as_ref()
            .map(PrompterLayout::text_height)
            .unwrap_or(0.0)
    }
}
