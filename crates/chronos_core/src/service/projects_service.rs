//! Projects use-case service: list, kanban board, analytics.
//!
//! # Contract
//! - `move_project` is the drag/drop path: a target that is not one of the
//!   three canonical statuses is a no-op, and dropping a card back onto its
//!   own column must not trigger a redundant persist.

use crate::model::ids::MillisIdGenerator;
use crate::model::project::{Project, ProjectStatus, DEFAULT_PROJECT_NAME, NO_DUE_DATE};
use crate::repo::slot_repo::{RepoResult, SlotRepository, PROJECTS_SLOT};
use crate::view::analytics::{project_analytics, ProjectAnalytics};
use crate::view::kanban::{kanban_board, project_list, KanbanBoard};
use log::info;

/// Raw dialog input for creating or editing a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    /// `None` for a new project.
    pub id: Option<i64>,
    pub name: String,
    pub desc: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
}

pub struct ProjectsService<R: SlotRepository> {
    repo: R,
    projects: Vec<Project>,
    ids: MillisIdGenerator,
}

impl<R: SlotRepository> ProjectsService<R> {
    pub fn open(repo: R) -> RepoResult<Self> {
        let projects: Vec<Project> = repo.load_json(PROJECTS_SLOT)?;
        info!(
            "event=collection_loaded module=projects status=ok count={}",
            projects.len()
        );
        Ok(Self {
            repo,
            projects,
            ids: MillisIdGenerator::new(),
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Upserts a dialog draft with entry defaults: blank name becomes
    /// "Untitled Project", blank due date "No Date". Status and priority
    /// are stored as given. Returns the saved id; unknown ids are no-ops.
    pub fn save_project(&mut self, draft: ProjectDraft) -> RepoResult<i64> {
        let project = Project {
            id: draft.id.unwrap_or(0),
            name: text_or(draft.name, DEFAULT_PROJECT_NAME),
            desc: draft.desc,
            status: draft.status,
            priority: draft.priority,
            due_date: text_or(draft.due_date, NO_DUE_DATE),
        };

        match draft.id {
            None => {
                let mut project = project;
                project.id = self.ids.next_id();
                let id = project.id;
                self.projects.push(project);
                self.flush()?;
                info!("event=project_created module=projects status=ok id={id}");
                Ok(id)
            }
            Some(id) => {
                if let Some(slot) = self.projects.iter_mut().find(|p| p.id == id) {
                    *slot = project;
                    self.flush()?;
                }
                Ok(id)
            }
        }
    }

    /// Removes a project; unknown id skips the persist.
    pub fn remove_project(&mut self, id: i64) -> RepoResult<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }
        self.flush()?;
        info!("event=project_removed module=projects status=ok id={id}");
        Ok(true)
    }

    /// Kanban drop handler. Only canonical statuses are valid targets and a
    /// same-status drop changes nothing; both cases return `false` without
    /// touching storage. Returns `true` when the card actually moved.
    pub fn move_project(&mut self, id: i64, target_status: &str) -> RepoResult<bool> {
        let Some(target) = ProjectStatus::parse(target_status) else {
            return Ok(false);
        };
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        if project.status == target.label() {
            return Ok(false);
        }
        project.status = target.label().to_string();
        self.flush()?;
        Ok(true)
    }

    pub fn board(&self) -> KanbanBoard<'_> {
        kanban_board(&self.projects)
    }

    /// Priority-ordered list view.
    pub fn list(&self) -> Vec<&Project> {
        project_list(&self.projects)
    }

    pub fn analytics(&self) -> ProjectAnalytics {
        project_analytics(&self.projects)
    }

    fn flush(&self) -> RepoResult<()> {
        self.repo.save_json(PROJECTS_SLOT, &self.projects)
    }
}

fn text_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
