//! Focus/break countdown state machine.
//!
//! The engine is tick-driven: the embedding schedules one `tick()` per
//! second while the engine reports itself running. Start and pause share a
//! single toggle, exactly like the dashboard's one start/pause button — two
//! rapid toggles before a tick fires leave the timer paused, not running.

use crate::model::pomodoro::PomodoroSettings;

const SECONDS_PER_MINUTE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    Break,
}

/// What one tick did, for the embedding to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// A focus second elapsed and should be accrued into statistics. Set on
    /// every focus-mode tick, including the one that expires the countdown.
    pub focus_second: bool,
    /// The mode whose countdown just ran out, if any.
    pub completed: Option<TimerMode>,
}

#[derive(Debug)]
pub struct TimerEngine {
    mode: TimerMode,
    time_left: u32,
    running: bool,
    focus_minutes: u32,
    break_minutes: u32,
    completed_focus: u32,
}

impl TimerEngine {
    /// Fresh engine in focus mode, stopped, seeded from user settings.
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            mode: TimerMode::Focus,
            time_left: settings.focus_time * SECONDS_PER_MINUTE,
            running: false,
            focus_minutes: settings.focus_time,
            break_minutes: settings.break_time,
            completed_focus: 0,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Monotonic count of completed focus periods this session.
    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    /// Filled dots of the 4-dot tally.
    pub fn tally_progress(&self) -> u32 {
        self.completed_focus % 4
    }

    pub fn settings(&self) -> PomodoroSettings {
        PomodoroSettings {
            focus_time: self.focus_minutes,
            break_time: self.break_minutes,
        }
    }

    /// Single start/pause control. Returns whether the timer is running
    /// afterwards. Pausing preserves the remaining time.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Cancels any countdown and enters `mode` with its full duration.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.running = false;
        self.mode = mode;
        self.time_left = self.duration_of(mode);
    }

    /// Re-enters the current mode, resetting the clock.
    pub fn reset(&mut self) {
        self.switch_mode(self.mode);
    }

    /// Updates the configured durations.
    ///
    /// Non-positive values are rejected wholesale and the prior
    /// configuration is retained. When the timer is stopped the new duration
    /// applies immediately by re-entering the current mode; while running it
    /// only takes effect from the next mode switch. Returns whether the new
    /// configuration was accepted.
    pub fn reconfigure(&mut self, focus_minutes: i64, break_minutes: i64) -> bool {
        if focus_minutes <= 0 || break_minutes <= 0 {
            return false;
        }
        self.focus_minutes = focus_minutes as u32;
        self.break_minutes = break_minutes as u32;
        if !self.running {
            self.switch_mode(self.mode);
        }
        true
    }

    /// Advances the countdown by one second.
    ///
    /// No-op unless running. On expiry the countdown stops, a completed
    /// focus period is tallied, and the opposite mode is entered with its
    /// full duration — without auto-starting.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::default();
        }

        self.time_left = self.time_left.saturating_sub(1);
        let mut outcome = TickOutcome {
            focus_second: self.mode == TimerMode::Focus,
            completed: None,
        };

        if self.time_left == 0 {
            let finished = self.mode;
            outcome.completed = Some(finished);
            match finished {
                TimerMode::Focus => {
                    self.completed_focus += 1;
                    self.switch_mode(TimerMode::Break);
                }
                TimerMode::Break => self.switch_mode(TimerMode::Focus),
            }
        }

        outcome
    }

    fn duration_of(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_minutes * SECONDS_PER_MINUTE,
            TimerMode::Break => self.break_minutes * SECONDS_PER_MINUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TimerEngine {
        TimerEngine::new(PomodoroSettings::default())
    }

    #[test]
    fn tick_without_start_is_a_no_op() {
        let mut timer = engine();
        let outcome = timer.tick();
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(timer.time_left(), 25 * 60);
    }

    #[test]
    fn double_toggle_pauses_before_any_tick() {
        let mut timer = engine();
        assert!(timer.toggle());
        assert!(!timer.toggle());
        assert!(!timer.is_running());
        assert_eq!(timer.time_left(), 25 * 60);
    }

    #[test]
    fn reconfigure_rejects_non_positive_durations() {
        let mut timer = engine();
        assert!(!timer.reconfigure(0, 5));
        assert!(!timer.reconfigure(25, -1));
        assert_eq!(timer.settings(), PomodoroSettings::default());
    }

    #[test]
    fn reconfigure_while_running_defers_to_next_switch() {
        let mut timer = engine();
        timer.toggle();
        timer.tick();
        assert!(timer.reconfigure(50, 10));
        // Clock untouched while running.
        assert_eq!(timer.time_left(), 25 * 60 - 1);

        timer.switch_mode(TimerMode::Focus);
        assert_eq!(timer.time_left(), 50 * 60);
    }
}
