//! Scroll playback state machine.
//!
//! `Idle` means the editor is showing. `Paused` and `Playing` both mean the
//! display is up. While playing, every tick moves the text up one pixel until
//! it has fully left the screen, at which point playback pauses itself.

use crate::settings::{MAX_SPEED, MIN_SPEED};
use std::time::Duration;
use tracing::{debug, info};

/// Start/stop handle for the recurring scroll tick.
pub trait Scheduler {
    fn start(&mut self, interval: Duration);
    fn stop(&mut self);
    /// The armed interval, or `None` when stopped.
    fn interval(&self) -> Option<Duration>;
}

/// Scheduler backed by the UI runtime: the app subscribes to a periodic
/// timer for as long as an interval is armed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerHandle {
    armed: Option<Duration>,
}

impl Scheduler for TimerHandle {
    fn start(&mut self, interval: Duration) {
        self.armed = Some(interval);
    }

    fn stop(&mut self) {
        self.armed = None;
    }

    fn interval(&self) -> Option<Duration> {
        self.armed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Paused,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing or no timer armed.
    Ignored,
    Advanced,
    /// The text scrolled fully off screen; playback is now paused.
    AutoPaused,
}

/// Tick period for a speed setting: 110 - speed milliseconds.
pub fn tick_interval(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(110 - u64::from(speed))
}

#[derive(Debug, Clone)]
pub struct PlaybackController<S: Scheduler> {
    phase: Phase,
    offset: i32,
    scheduler: S,
}

impl<S: Scheduler + Default> Default for PlaybackController<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Scheduler> PlaybackController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            phase: Phase::Idle,
            offset: 0,
            scheduler,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn in_display(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Vertical displacement of the text's top edge from the display's top edge.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Show the display with the text parked just below the visible area.
    pub fn enter_display(&mut self, container_height: f32) {
        self.scheduler.stop();
        self.phase = Phase::Paused;
        self.offset = container_height.max(0.0).round() as i32;
        info!(offset = self.offset, "Entered display mode");
    }

    /// Paused -> Playing. Returns whether the phase changed.
    pub fn play(&mut self, speed: u32) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        let interval = tick_interval(speed);
        self.scheduler.start(interval);
        self.phase = Phase::Playing;
        debug!(speed, interval_ms = interval.as_millis() as u64, "Playback started");
        true
    }

    /// Playing -> Paused. Returns whether the phase changed.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.scheduler.stop();
        self.phase = Phase::Paused;
        debug!(offset = self.offset, "Playback paused");
        true
    }

    /// Flip Paused <-> Playing. Ignored while idle.
    pub fn toggle(&mut self, speed: u32) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::Paused => self.play(speed),
            Phase::Playing => self.pause(),
        }
    }

    pub fn exit_display(&mut self) {
        self.pause();
        self.scheduler.stop();
        self.phase = Phase::Idle;
        self.offset = 0;
        info!("Left display mode");
    }

    /// Advance one pixel, pausing once the offset passes `-text_height`.
    pub fn tick(&mut self, text_height: f32) -> TickOutcome {
        if self.phase != Phase::Playing || self.scheduler.interval().is_none() {
            return TickOutcome::Ignored;
        }
        self.offset -= 1;
        if (self.offset as f32) < -text_height {
            self.pause();
            info!(offset = self.offset, text_height, "Script scrolled off screen");
            return TickOutcome::AutoPaused;
        }
        TickOutcome::Advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scheduler that records calls and lets tests advance time by hand.
    #[derive(Debug, Default)]
    struct FakeClock {
        armed: Option<Duration>,
        since_tick: Duration,
        starts: usize,
        stops: usize,
    }

    impl Scheduler for FakeClock {
        fn start(&mut self, interval: Duration) {
            self.armed = Some(interval);
            self.since_tick = Duration::ZERO;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.armed = None;
            self.stops += 1;
        }

        fn interval(&self) -> Option<Duration> {
            self.armed
        }
    }

    /// Advance the fake clock by `elapsed`, delivering every tick that falls due.
    fn advance(ctrl: &mut PlaybackController<FakeClock>, elapsed: Duration, text_height: f32) -> usize {
        let mut delivered = 0;
        let mut remaining = elapsed;
        while let Some(interval) = ctrl.scheduler.armed {
            let due = interval - ctrl.scheduler.since_tick;
            if remaining < due {
                ctrl.scheduler.since_tick += remaining;
                break;
            }
            remaining -= due;
            ctrl.scheduler.since_tick = Duration::ZERO;
            if ctrl.tick(text_height) != TickOutcome::Ignored {
                delivered += 1;
            }
        }
        delivered
    }

    fn controller() -> PlaybackController<FakeClock> {
        PlaybackController::new(FakeClock::default())
    }

    #[test]
    fn tick_interval_spans_ten_to_one_hundred_nine_ms() {
        let mut previous = None;
        for speed in MIN_SPEED..=MAX_SPEED {
            let interval = tick_interval(speed);
            assert_eq!(interval, Duration::from_millis(110 - speed as u64));
            if let Some(prev) = previous {
                assert!(interval < prev);
            }
            previous = Some(interval);
        }
        assert_eq!(tick_interval(1), Duration::from_millis(109));
        assert_eq!(tick_interval(100), Duration::from_millis(10));
        assert_eq!(tick_interval(0), Duration::from_millis(109));
        assert_eq!(tick_interval(500), Duration::from_millis(10));
    }

    #[test]
    fn enter_display_resets_offset_from_any_state() {
        let mut ctrl = controller();
        ctrl.enter_display(600.0);
        assert_eq!(ctrl.phase(), Phase::Paused);
        assert_eq!(ctrl.offset(), 600);

        ctrl.play(100);
        advance(&mut ctrl, Duration::from_millis(50), 1000.0);
        assert!(ctrl.offset() < 600);

        ctrl.enter_display(480.0);
        assert_eq!(ctrl.phase(), Phase::Paused);
        assert_eq!(ctrl.offset(), 480);
        assert_eq!(ctrl.scheduler().interval(), None);
    }

    #[test]
    fn playing_moves_one_pixel_per_interval() {
        let mut ctrl = controller();
        ctrl.enter_display(300.0);
        assert!(ctrl.play(20));
        assert_eq!(ctrl.scheduler().interval(), Some(Duration::from_millis(90)));

        let ticks = advance(&mut ctrl, Duration::from_millis(900), 1000.0);
        assert_eq!(ticks, 10);
        assert_eq!(ctrl.offset(), 290);
    }

    #[test]
    fn auto_pauses_after_text_leaves_screen() {
        let mut ctrl = controller();
        ctrl.enter_display(10.0);
        ctrl.play(100);

        advance(&mut ctrl, Duration::from_secs(60), 25.0);
        assert_eq!(ctrl.phase(), Phase::Paused);
        assert_eq!(ctrl.offset(), -26);
        assert_eq!(ctrl.scheduler().interval(), None);

        // Stray ticks after the auto-pause never advance.
        assert_eq!(ctrl.tick(25.0), TickOutcome::Ignored);
        assert_eq!(ctrl.offset(), -26);
    }

    #[test]
    fn pause_while_paused_is_a_no_op() {
        let mut ctrl = controller();
        ctrl.enter_display(100.0);
        let stops = ctrl.scheduler().stops;
        assert!(!ctrl.pause());
        assert_eq!(ctrl.phase(), Phase::Paused);
        assert_eq!(ctrl.scheduler().stops, stops);
    }

    #[test]
    fn play_while_playing_does_not_restart_timer() {
        let mut ctrl = controller();
        ctrl.enter_display(100.0);
        assert!(ctrl.play(50));
        assert!(!ctrl.play(90));
        assert_eq!(ctrl.scheduler().starts, 1);
        assert_eq!(ctrl.scheduler().interval(), Some(Duration::from_millis(60)));
    }

    #[test]
    fn idle_ignores_play_toggle_and_ticks() {
        let mut ctrl = controller();
        assert!(!ctrl.play(20));
        assert!(!ctrl.toggle(20));
        assert_eq!(ctrl.tick(0.0), TickOutcome::Ignored);
        assert_eq!(ctrl.phase(), Phase::Idle);
        assert_eq!(ctrl.scheduler().starts, 0);
    }

    #[test]
    fn toggle_flips_between_paused_and_playing() {
        let mut ctrl = controller();
        ctrl.enter_display(100.0);
        assert!(ctrl.toggle(20));
        assert!(ctrl.is_playing());
        assert!(ctrl.toggle(20));
        assert_eq!(ctrl.phase(), Phase::Paused);
    }

    #[test]
    fn exit_display_stops_timer_and_returns_to_idle() {
        let mut ctrl = controller();
        ctrl.enter_display(100.0);
        ctrl.play(20);
        ctrl.exit_display();
        assert_eq!(ctrl.phase(), Phase::Idle);
        assert!(!ctrl.in_display());
        assert_eq!(ctrl.scheduler().interval(), None);
        assert_eq!(ctrl.offset(), 0);
    }

    #[test]
    fn timer_handle_tracks_armed_interval() {
        let mut ctrl: PlaybackController<TimerHandle> = PlaybackController::default();
        ctrl.enter_display(100.0);
        ctrl.play(30);
        assert_eq!(ctrl.scheduler().interval(), Some(Duration::from_millis(80)));
        ctrl.pause();
        assert_eq!(ctrl.scheduler().interval(), None);
    }
}
