//! Calendar event / to-do item model.
//!
//! # Responsibility
//! - Define the record stored in the `chronosCalendarData` slot.
//! - Provide timestamp parsing used for chronological ordering.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - A missing `syncedToTodo` field means the event *is* on the to-do list.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default tag color assigned when an event has none.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Neutral color used to gray out completed events on the calendar.
pub const COMPLETED_EVENT_COLOR: &str = "#64748b";

/// One calendar event, doubling as a to-do entry when `synced_to_todo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable string id; empty on a draft that has not been saved yet.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Start timestamp as stored on the wire (ISO-8601-ish string).
    #[serde(default)]
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Controls membership in the to-do projection, independent of the
    /// calendar projection.
    #[serde(default = "default_true")]
    pub synced_to_todo: bool,
    #[serde(default)]
    pub is_completed: bool,
}

fn default_true() -> bool {
    true
}

impl Event {
    /// Creates a saved event with a fresh unique id.
    pub fn new(title: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            start: start.into(),
            end: None,
            color: None,
            synced_to_todo: true,
            is_completed: false,
        }
    }

    /// Returns the tag color, falling back to the default.
    pub fn tag_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Parses `start` for ordering purposes.
    ///
    /// Accepts RFC 3339 as well as the zone-less `datetime-local` and plain
    /// date forms the dashboard historically stored. Returns `None` for
    /// anything else; callers treat unparseable starts as equal.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        parse_start(&self.start)
    }
}

fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_gets_id_and_defaults() {
        let event = Event::new("Buy milk", "2024-01-01T09:00:00Z");
        assert!(!event.id.is_empty());
        assert!(event.synced_to_todo);
        assert!(!event.is_completed);
        assert_eq!(event.tag_color(), DEFAULT_EVENT_COLOR);
    }

    #[test]
    fn start_instant_accepts_stored_forms() {
        assert!(parse_start("2024-01-01T09:00:00Z").is_some());
        assert!(parse_start("2024-01-01T09:00").is_some());
        assert!(parse_start("2024-01-01").is_some());
        assert!(parse_start("whenever").is_none());
    }

    #[test]
    fn wire_shape_uses_camel_case_and_defaults() {
        let decoded: Event = serde_json::from_str(
            r#"{"id":"1700000000000","title":"Old item","start":"2023-11-14T09:00"}"#,
        )
        .unwrap();
        assert!(decoded.synced_to_todo);
        assert!(!decoded.is_completed);

        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["syncedToTodo"], true);
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("end").is_none());
    }
}
