//! Calendar-widget feed projection.

use crate::model::event::{Event, COMPLETED_EVENT_COLOR};
use serde::Serialize;

/// One displayable calendar entry, colors already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub background_color: String,
    pub border_color: String,
}

/// Maps every event to a calendar entry. Completed events are grayed out
/// with the fixed neutral color; incomplete ones use their tag color.
pub fn calendar_feed(events: &[Event]) -> Vec<CalendarEntry> {
    events
        .iter()
        .map(|event| {
            let color = if event.is_completed {
                COMPLETED_EVENT_COLOR
            } else {
                event.tag_color()
            };
            CalendarEntry {
                id: event.id.clone(),
                title: event.title.clone(),
                start: event.start.clone(),
                end: event.end.clone(),
                background_color: color.to_string(),
                border_color: color.to_string(),
            }
        })
        .collect()
}
