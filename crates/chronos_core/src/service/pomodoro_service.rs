//! Pomodoro use-case service: timer, statistics, side to-do list.
//!
//! Wires the countdown engine to the statistics ledger: every focus-mode
//! tick accrues one second and writes the stats slot through. Settings
//! changes persist only when the engine accepts them.

use crate::model::pomodoro::{FocusStats, PomodoroSettings, PomodoroTodo};
use crate::repo::slot_repo::{
    RepoResult, SlotRepository, POMODORO_SETTINGS_SLOT, POMODORO_STATS_SLOT, POMODORO_TODOS_SLOT,
};
use crate::timer::engine::{TickOutcome, TimerEngine, TimerMode};
use chrono::{DateTime, Local, TimeZone};
use log::info;

pub struct PomodoroService<R: SlotRepository> {
    repo: R,
    engine: TimerEngine,
    stats: FocusStats,
    todos: Vec<PomodoroTodo>,
}

impl<R: SlotRepository> PomodoroService<R> {
    /// Loads settings, stats and the to-do list; the timer starts stopped
    /// in focus mode with the configured duration.
    pub fn open(repo: R) -> RepoResult<Self> {
        let settings: PomodoroSettings = repo.load_json(POMODORO_SETTINGS_SLOT)?;
        let stats: FocusStats = repo.load_json(POMODORO_STATS_SLOT)?;
        let todos: Vec<PomodoroTodo> = repo.load_json(POMODORO_TODOS_SLOT)?;
        info!(
            "event=pomodoro_loaded module=pomodoro status=ok focus_min={} break_min={} todos={}",
            settings.focus_time,
            settings.break_time,
            todos.len()
        );
        Ok(Self {
            repo,
            engine: TimerEngine::new(settings),
            stats,
            todos,
        })
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn stats(&self) -> FocusStats {
        self.stats
    }

    pub fn todos(&self) -> &[PomodoroTodo] {
        &self.todos
    }

    /// The single start/pause control; returns whether the timer runs now.
    pub fn toggle(&mut self) -> bool {
        self.engine.toggle()
    }

    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.engine.switch_mode(mode);
    }

    /// Resets the current mode's clock.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Applies new durations when valid and persists them; invalid input
    /// leaves both the engine and the stored settings untouched.
    pub fn reconfigure(&mut self, focus_minutes: i64, break_minutes: i64) -> RepoResult<bool> {
        if !self.engine.reconfigure(focus_minutes, break_minutes) {
            return Ok(false);
        }
        self.repo
            .save_json(POMODORO_SETTINGS_SLOT, &self.engine.settings())?;
        Ok(true)
    }

    /// One scheduler tick at the current wall-clock instant.
    pub fn tick(&mut self) -> RepoResult<TickOutcome> {
        self.tick_at(&Local::now())
    }

    /// One scheduler tick at an explicit instant. Focus seconds accrue into
    /// the ledger (rolling period buckets first) and the stats slot is
    /// written through.
    pub fn tick_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> RepoResult<TickOutcome> {
        let outcome = self.engine.tick();
        if outcome.focus_second {
            self.stats.increment(1, now);
            self.repo.save_json(POMODORO_STATS_SLOT, &self.stats)?;
        }
        if outcome.completed.is_some() {
            info!(
                "event=period_completed module=pomodoro status=ok completed_focus={}",
                self.engine.completed_focus()
            );
        }
        Ok(outcome)
    }

    /// Appends a to-do entry; blank input is ignored.
    pub fn add_todo(&mut self, text: &str) -> RepoResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.todos.push(PomodoroTodo {
            text: text.to_string(),
            completed: false,
        });
        self.flush_todos()?;
        Ok(true)
    }

    pub fn set_todo_completed(&mut self, index: usize, completed: bool) -> RepoResult<bool> {
        let Some(todo) = self.todos.get_mut(index) else {
            return Ok(false);
        };
        todo.completed = completed;
        self.flush_todos()?;
        Ok(true)
    }

    pub fn toggle_todo(&mut self, index: usize) -> RepoResult<bool> {
        let Some(todo) = self.todos.get(index) else {
            return Ok(false);
        };
        let flipped = !todo.completed;
        self.set_todo_completed(index, flipped)
    }

    /// Removes the entry at `index`; out-of-range is a no-op.
    pub fn remove_todo(&mut self, index: usize) -> RepoResult<bool> {
        if index >= self.todos.len() {
            return Ok(false);
        }
        self.todos.remove(index);
        self.flush_todos()?;
        Ok(true)
    }

    fn flush_todos(&self) -> RepoResult<()> {
        self.repo.save_json(POMODORO_TODOS_SLOT, &self.todos)
    }
}
