//! To-do list projection of the event collection.

use crate::model::event::Event;
use std::cmp::Ordering;

/// Events shown on the to-do sidebar, incomplete first, each group in
/// chronological `start` order.
///
/// Events with `synced_to_todo == false` are left out entirely. Unparseable
/// start timestamps compare equal, so the sort is stable for them and
/// insertion order is preserved.
pub fn todo_list(events: &[Event]) -> Vec<&Event> {
    let mut todos: Vec<&Event> = events.iter().filter(|e| e.synced_to_todo).collect();
    todos.sort_by(|a, b| {
        a.is_completed
            .cmp(&b.is_completed)
            .then_with(|| match (a.start_instant(), b.start_instant()) {
                (Some(a_start), Some(b_start)) => a_start.cmp(&b_start),
                _ => Ordering::Equal,
            })
    });
    todos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, start: &str, completed: bool) -> Event {
        let mut e = Event::new(title, start);
        e.is_completed = completed;
        e
    }

    #[test]
    fn incomplete_precede_completed_then_chronological() {
        let events = vec![
            event("done-early", "2026-01-01T08:00", true),
            event("open-late", "2026-01-02T08:00", false),
            event("open-early", "2026-01-01T07:00", false),
        ];
        let titles: Vec<&str> = todo_list(&events).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["open-early", "open-late", "done-early"]);
    }

    #[test]
    fn unsynced_events_are_excluded() {
        let mut hidden = event("hidden", "2026-01-01T08:00", false);
        hidden.synced_to_todo = false;
        let events = vec![hidden, event("shown", "2026-01-01T09:00", false)];
        let todos = todo_list(&events);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "shown");
    }
}
