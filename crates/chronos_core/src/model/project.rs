//! Project model and canonical status/priority vocabulary.
//!
//! # Responsibility
//! - Define the record stored in the `chronosProjectsData` slot.
//! - Parse free-form status/priority strings into the canonical enums used
//!   by board and analytics projections.
//!
//! # Invariants
//! - `status` and `priority` stay raw strings on the wire so unrecognized
//!   values survive load/save round-trips; canonicalization happens only in
//!   projections and transitions.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";
pub const NO_DUE_DATE: &str = "No Date";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Millisecond-derived numeric id; 0 on an unsaved draft.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_due_date")]
    pub due_date: String,
}

fn default_status() -> String {
    ProjectStatus::NotStarted.label().to_string()
}

fn default_priority() -> String {
    Priority::Medium.label().to_string()
}

fn default_due_date() -> String {
    NO_DUE_DATE.to_string()
}

impl Project {
    /// Canonical status, or `None` for an unrecognized string.
    pub fn canonical_status(&self) -> Option<ProjectStatus> {
        ProjectStatus::parse(&self.status)
    }

    /// Canonical priority, or `None` for an unrecognized string.
    pub fn canonical_priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

/// The three kanban columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Complete];

    /// Wire/display label, matching the stored strings exactly.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Not Started" => Some(Self::NotStarted),
            "In Progress" => Some(Self::InProgress),
            "Complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Sort weight for the priority-ordered list view; higher sorts first.
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_round_trips_unchanged() {
        let decoded: Project =
            serde_json::from_str(r#"{"id":1,"name":"X","status":"Paused"}"#).unwrap();
        assert_eq!(decoded.status, "Paused");
        assert_eq!(decoded.canonical_status(), None);

        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["status"], "Paused");
        assert_eq!(json["dueDate"], NO_DUE_DATE);
    }

    #[test]
    fn labels_parse_back_to_themselves() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.label()), Some(status));
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.label()), Some(priority));
        }
    }
}
