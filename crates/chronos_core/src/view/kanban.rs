//! Kanban board and priority-list projections of the project collection.

use crate::model::project::{Priority, Project, ProjectStatus};

/// The three board columns. Projects whose status string matches no
/// canonical column are dropped from the board (they remain in the
/// underlying collection).
#[derive(Debug, Default)]
pub struct KanbanBoard<'a> {
    pub not_started: Vec<&'a Project>,
    pub in_progress: Vec<&'a Project>,
    pub complete: Vec<&'a Project>,
}

impl<'a> KanbanBoard<'a> {
    pub fn column(&self, status: ProjectStatus) -> &[&'a Project] {
        match status {
            ProjectStatus::NotStarted => &self.not_started,
            ProjectStatus::InProgress => &self.in_progress,
            ProjectStatus::Complete => &self.complete,
        }
    }

    /// Cards on the board; at most the collection size.
    pub fn card_count(&self) -> usize {
        self.not_started.len() + self.in_progress.len() + self.complete.len()
    }
}

pub fn kanban_board(projects: &[Project]) -> KanbanBoard<'_> {
    let mut board = KanbanBoard::default();
    for project in projects {
        match project.canonical_status() {
            Some(ProjectStatus::NotStarted) => board.not_started.push(project),
            Some(ProjectStatus::InProgress) => board.in_progress.push(project),
            Some(ProjectStatus::Complete) => board.complete.push(project),
            None => {}
        }
    }
    board
}

/// List view ordered by priority weight, High before Medium before Low.
/// Unrecognized priorities sort last; ties keep insertion order.
pub fn project_list(projects: &[Project]) -> Vec<&Project> {
    let weight = |p: &Project| p.canonical_priority().map_or(0, Priority::weight);
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| weight(b).cmp(&weight(a)));
    sorted
}
