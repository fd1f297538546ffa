//! Core domain logic for Chronos.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timer;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::Event;
pub use model::grades::{GradesBook, GradesConfig, Subject};
pub use model::hydration::{WaterTracker, WATER_GOAL};
pub use model::pomodoro::{FocusStats, PomodoroSettings, PomodoroTodo};
pub use model::project::{Priority, Project, ProjectStatus};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::calendar_service::{CalendarService, EventDraft};
pub use service::grades_service::{GradesService, SubjectDraft};
pub use service::hydration_service::HydrationService;
pub use service::pomodoro_service::PomodoroService;
pub use service::projects_service::{ProjectDraft, ProjectsService};
pub use timer::engine::{TickOutcome, TimerEngine, TimerMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
