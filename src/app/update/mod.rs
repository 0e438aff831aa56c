use std::path::PathBuf;

mod controls;
mod core;
mod import;
mod playback;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ImportScript(PathBuf),
    ScheduleAutoplay { session: u64 },
    ScheduleIndicatorHide { generation: u64 },
    ScheduleStatusClear { generation: u64 },
}
