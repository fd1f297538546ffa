//! Analytics aggregates over the project collection.

use crate::model::project::{Priority, Project, ProjectStatus};

/// Counts and completion figures feeding the analytics widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectAnalytics {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub complete: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ProjectAnalytics {
    /// Completed share, rounded to whole percent; 0 for an empty collection.
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.complete as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn pending(&self) -> usize {
        self.total - self.complete
    }

    pub fn status_count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::NotStarted => self.not_started,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Complete => self.complete,
        }
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Tallies canonical statuses and priorities; unrecognized values count
/// toward `total` but toward no bucket.
pub fn project_analytics(projects: &[Project]) -> ProjectAnalytics {
    let mut analytics = ProjectAnalytics {
        total: projects.len(),
        ..ProjectAnalytics::default()
    };
    for project in projects {
        match project.canonical_status() {
            Some(ProjectStatus::NotStarted) => analytics.not_started += 1,
            Some(ProjectStatus::InProgress) => analytics.in_progress += 1,
            Some(ProjectStatus::Complete) => analytics.complete += 1,
            None => {}
        }
        match project.canonical_priority() {
            Some(Priority::High) => analytics.high += 1,
            Some(Priority::Medium) => analytics.medium += 1,
            Some(Priority::Low) => analytics.low += 1,
            None => {}
        }
    }
    analytics
}
