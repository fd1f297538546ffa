use chronos_core::db::open_db_in_memory;
use chronos_core::repo::slot_repo::CALENDAR_SLOT;
use chronos_core::{CalendarService, EventDraft, SlotRepository, SqliteSlotRepository};

#[test]
fn saving_a_blank_draft_fills_entry_defaults() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let id = service.save_event(EventDraft::default()).unwrap();

    let event = service.find(&id).unwrap();
    assert_eq!(event.title, "(No Title)");
    assert!(!event.start.is_empty());
    assert_eq!(event.color.as_deref(), Some("#3b82f6"));
    assert!(!event.is_completed);
}

#[test]
fn saving_with_known_id_edits_without_touching_completion() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let id = service
        .save_event(EventDraft {
            title: "Revise algebra".to_string(),
            start: "2026-09-01T09:00".to_string(),
            synced_to_todo: true,
            ..EventDraft::default()
        })
        .unwrap();
    service.set_completion(&id, true).unwrap();

    service
        .save_event(EventDraft {
            id: id.clone(),
            title: "Revise geometry".to_string(),
            start: "2026-09-02T09:00".to_string(),
            color: "#ff0000".to_string(),
            synced_to_todo: false,
        })
        .unwrap();

    let event = service.find(&id).unwrap();
    assert_eq!(event.title, "Revise geometry");
    assert_eq!(event.start, "2026-09-02T09:00");
    assert_eq!(event.color.as_deref(), Some("#ff0000"));
    assert!(!event.synced_to_todo);
    assert!(event.is_completed, "editing must not reset completion");
}

#[test]
fn saving_with_unknown_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    service
        .save_event(EventDraft {
            id: "no-such-event".to_string(),
            title: "ghost".to_string(),
            ..EventDraft::default()
        })
        .unwrap();

    assert!(service.events().is_empty());
}

#[test]
fn removed_event_disappears_from_both_projections() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let id = service
        .save_event(EventDraft {
            title: "Lab report".to_string(),
            start: "2026-09-03T14:00".to_string(),
            synced_to_todo: true,
            ..EventDraft::default()
        })
        .unwrap();

    assert!(service.remove_event(&id).unwrap());
    assert!(service.todo_list().is_empty());
    assert!(service.calendar_feed().is_empty());
    assert!(!service.remove_event(&id).unwrap());
}

#[test]
fn reschedule_replaces_start_and_optionally_end() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let id = service
        .save_event(EventDraft {
            title: "Standup".to_string(),
            start: "2026-09-04T10:00".to_string(),
            ..EventDraft::default()
        })
        .unwrap();

    assert!(service
        .reschedule(&id, "2026-09-05T10:00", Some("2026-09-05T10:30"))
        .unwrap());
    let event = service.find(&id).unwrap();
    assert_eq!(event.start, "2026-09-05T10:00");
    assert_eq!(event.end.as_deref(), Some("2026-09-05T10:30"));

    assert!(service.reschedule(&id, "2026-09-06T10:00", None).unwrap());
    let event = service.find(&id).unwrap();
    assert_eq!(event.start, "2026-09-06T10:00");
    assert_eq!(
        event.end.as_deref(),
        Some("2026-09-05T10:30"),
        "absent end must be left alone"
    );

    assert!(!service.reschedule("missing", "2026-09-07T10:00", None).unwrap());
}

#[test]
fn todo_projection_hides_unsynced_and_sinks_completed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let done = service
        .save_event(EventDraft {
            title: "Early but done".to_string(),
            start: "2026-09-01T08:00".to_string(),
            synced_to_todo: true,
            ..EventDraft::default()
        })
        .unwrap();
    service.set_completion(&done, true).unwrap();
    service
        .save_event(EventDraft {
            title: "Calendar only".to_string(),
            start: "2026-09-01T09:00".to_string(),
            synced_to_todo: false,
            ..EventDraft::default()
        })
        .unwrap();
    service
        .save_event(EventDraft {
            title: "Pending".to_string(),
            start: "2026-09-02T09:00".to_string(),
            synced_to_todo: true,
            ..EventDraft::default()
        })
        .unwrap();

    let todos = service.todo_list();
    let titles: Vec<&str> = todos.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Pending", "Early but done"]);
}

#[test]
fn completed_events_feed_with_the_muted_color() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();

    let id = service
        .save_event(EventDraft {
            title: "Essay".to_string(),
            start: "2026-09-08T12:00".to_string(),
            color: "#ff0000".to_string(),
            ..EventDraft::default()
        })
        .unwrap();

    service.toggle_completion(&id).unwrap();
    let feed = service.calendar_feed();
    assert_eq!(feed[0].background_color, "#64748b");

    service.toggle_completion(&id).unwrap();
    let feed = service.calendar_feed();
    assert_eq!(feed[0].background_color, "#ff0000");
}

#[test]
fn historic_payload_without_sync_flag_defaults_to_synced() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    repo.write_slot(
        CALENDAR_SLOT,
        r#"[{"id":"legacy-1","title":"Old event","start":"2025-01-10T08:00"}]"#,
    )
    .unwrap();

    let service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();
    let event = service.find("legacy-1").unwrap();
    assert!(event.synced_to_todo);
    assert!(!event.is_completed);
    assert_eq!(service.todo_list().len(), 1);
}

#[test]
fn malformed_slot_recovers_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    repo.write_slot(CALENDAR_SLOT, "{not json at all").unwrap();

    let service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();
    assert!(service.events().is_empty());
}

#[test]
fn events_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chronos.db");

    let conn = chronos_core::db::open_db(&path).unwrap();
    let id = {
        let mut service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();
        service
            .save_event(EventDraft {
                title: "Persistent".to_string(),
                start: "2026-09-09T09:00".to_string(),
                synced_to_todo: true,
                ..EventDraft::default()
            })
            .unwrap()
    };
    drop(conn);

    let conn = chronos_core::db::open_db(&path).unwrap();
    let service = CalendarService::open(SqliteSlotRepository::new(&conn)).unwrap();
    let event = service.find(&id).unwrap();
    assert_eq!(event.title, "Persistent");
}
