//! Pomodoro slot payloads: timer settings, side to-do list, focus stats.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// User-configured focus/break durations in minutes (`pomodoroSettings`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSettings {
    #[serde(default = "default_focus_minutes")]
    pub focus_time: u32,
    #[serde(default = "default_break_minutes")]
    pub break_time: u32,
}

fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_time: DEFAULT_FOCUS_MINUTES,
            break_time: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// One entry of the timer page's side to-do list (`pomodoroTodos`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroTodo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Accumulated focus seconds per calendar period (`pomodoroStats`).
///
/// `last_sec` is the epoch-millisecond stamp of the last update; period
/// boundary checks compare it against the current instant before adding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusStats {
    #[serde(default)]
    pub today: u64,
    #[serde(default)]
    pub week: u64,
    #[serde(default)]
    pub month: u64,
    #[serde(default)]
    pub year: u64,
    #[serde(default)]
    pub last_sec: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_25_and_5() {
        let settings = PomodoroSettings::default();
        assert_eq!(settings.focus_time, 25);
        assert_eq!(settings.break_time, 5);
    }

    #[test]
    fn partial_settings_fill_the_missing_field() {
        let settings: PomodoroSettings = serde_json::from_str(r#"{"focusTime":50}"#).unwrap();
        assert_eq!(settings.focus_time, 50);
        assert_eq!(settings.break_time, 5);
    }

    #[test]
    fn stats_wire_shape_is_camel_case() {
        let stats: FocusStats =
            serde_json::from_str(r#"{"today":120,"lastSec":1700000000000}"#).unwrap();
        assert_eq!(stats.today, 120);
        assert_eq!(stats.week, 0);
        assert_eq!(stats.last_sec, 1_700_000_000_000);
    }
}
