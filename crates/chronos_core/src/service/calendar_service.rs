//! Calendar/to-do use-case service.
//!
//! # Responsibility
//! - CRUD over the event collection with write-through persistence.
//! - Hand the to-do and calendar projections a consistent snapshot.
//!
//! # Contract
//! - Saving a draft without an id creates a fresh event; with an unknown id
//!   it is a silent no-op; with a known id it replaces the editable fields
//!   wholesale while leaving the completion flag alone.

use crate::model::event::{Event, DEFAULT_EVENT_COLOR};
use crate::repo::slot_repo::{RepoResult, SlotRepository, CALENDAR_SLOT};
use crate::view::calendar_feed::{calendar_feed, CalendarEntry};
use crate::view::todo::todo_list;
use chrono::{SecondsFormat, Utc};
use log::info;

/// Raw dialog input for creating or editing an event.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    /// Empty for a new event.
    pub id: String,
    pub title: String,
    pub start: String,
    pub color: String,
    pub synced_to_todo: bool,
}

pub struct CalendarService<R: SlotRepository> {
    repo: R,
    events: Vec<Event>,
}

impl<R: SlotRepository> CalendarService<R> {
    /// Loads the event collection from its slot; absent or malformed data
    /// starts an empty collection.
    pub fn open(repo: R) -> RepoResult<Self> {
        let events: Vec<Event> = repo.load_json(CALENDAR_SLOT)?;
        info!(
            "event=collection_loaded module=calendar status=ok count={}",
            events.len()
        );
        Ok(Self { repo, events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Upserts a dialog draft, substituting defaults for blank fields:
    /// empty title becomes "(No Title)", empty start becomes now, empty
    /// color the default tag color. Returns the saved event's id.
    pub fn save_event(&mut self, draft: EventDraft) -> RepoResult<String> {
        let title = if draft.title.trim().is_empty() {
            "(No Title)".to_string()
        } else {
            draft.title
        };
        let start = if draft.start.trim().is_empty() {
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        } else {
            draft.start
        };
        let color = if draft.color.trim().is_empty() {
            DEFAULT_EVENT_COLOR.to_string()
        } else {
            draft.color
        };

        if draft.id.is_empty() {
            let mut event = Event::new(title, start);
            event.color = Some(color);
            event.synced_to_todo = draft.synced_to_todo;
            let id = event.id.clone();
            self.events.push(event);
            self.flush()?;
            info!("event=event_created module=calendar status=ok id={id}");
            return Ok(id);
        }

        if let Some(existing) = self.events.iter_mut().find(|e| e.id == draft.id) {
            existing.title = title;
            existing.start = start;
            existing.color = Some(color);
            existing.synced_to_todo = draft.synced_to_todo;
            self.flush()?;
        }
        Ok(draft.id)
    }

    /// Drag-reschedule from the calendar widget: replaces `start`, and `end`
    /// only when the widget supplied one. Unknown id is a no-op.
    pub fn reschedule(&mut self, id: &str, start: &str, end: Option<&str>) -> RepoResult<bool> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        event.start = start.to_string();
        if let Some(end) = end {
            event.end = Some(end.to_string());
        }
        self.flush()?;
        Ok(true)
    }

    /// Removes the event; removing an unknown id is a no-op that skips the
    /// persist entirely.
    pub fn remove_event(&mut self, id: &str) -> RepoResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Ok(false);
        }
        self.flush()?;
        info!("event=event_removed module=calendar status=ok id={id}");
        Ok(true)
    }

    pub fn set_completion(&mut self, id: &str, completed: bool) -> RepoResult<bool> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        event.is_completed = completed;
        self.flush()?;
        Ok(true)
    }

    pub fn toggle_completion(&mut self, id: &str) -> RepoResult<bool> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        event.is_completed = !event.is_completed;
        self.flush()?;
        Ok(true)
    }

    /// Current to-do sidebar projection.
    pub fn todo_list(&self) -> Vec<&Event> {
        todo_list(&self.events)
    }

    /// Current calendar-widget feed.
    pub fn calendar_feed(&self) -> Vec<CalendarEntry> {
        calendar_feed(&self.events)
    }

    fn flush(&self) -> RepoResult<()> {
        self.repo.save_json(CALENDAR_SLOT, &self.events)
    }
}
