use chrono::NaiveDate;
use chronos_core::db::open_db_in_memory;
use chronos_core::repo::slot_repo::WATER_SLOT;
use chronos_core::{HydrationService, SlotRepository, SqliteSlotRepository, WaterTracker};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fresh_tracker_starts_at_zero_with_the_shared_goal() {
    let conn = open_db_in_memory().unwrap();
    let service =
        HydrationService::open_at(SqliteSlotRepository::new(&conn), day(2026, 8, 28)).unwrap();

    assert_eq!(service.count(), 0);
    assert_eq!(service.goal(), 8);
}

#[test]
fn glasses_accumulate_and_survive_reopen_on_the_same_day() {
    let conn = open_db_in_memory().unwrap();
    let today = day(2026, 8, 28);
    {
        let mut service =
            HydrationService::open_at(SqliteSlotRepository::new(&conn), today).unwrap();
        assert_eq!(service.add_glass().unwrap(), 1);
        assert_eq!(service.add_glass().unwrap(), 2);
        assert_eq!(service.add_glass().unwrap(), 3);
    }

    let service = HydrationService::open_at(SqliteSlotRepository::new(&conn), today).unwrap();
    assert_eq!(service.count(), 3);
}

#[test]
fn next_day_resets_the_count_and_persists_the_reset() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut service =
            HydrationService::open_at(SqliteSlotRepository::new(&conn), day(2026, 8, 28)).unwrap();
        service.add_glass().unwrap();
        service.add_glass().unwrap();
    }

    let service =
        HydrationService::open_at(SqliteSlotRepository::new(&conn), day(2026, 8, 29)).unwrap();
    assert_eq!(service.count(), 0);

    let stored: WaterTracker = SqliteSlotRepository::new(&conn)
        .load_json(WATER_SLOT)
        .unwrap();
    assert_eq!(stored.date, "2026-08-29");
    assert_eq!(stored.count, 0);
}

#[test]
fn unreadable_stored_date_counts_as_stale() {
    let conn = open_db_in_memory().unwrap();
    SqliteSlotRepository::new(&conn)
        .write_slot(WATER_SLOT, r#"{"date":"yesterday-ish","count":6}"#)
        .unwrap();

    let service =
        HydrationService::open_at(SqliteSlotRepository::new(&conn), day(2026, 8, 28)).unwrap();
    assert_eq!(service.count(), 0);
}

#[test]
fn manual_reset_zeroes_the_current_day() {
    let conn = open_db_in_memory().unwrap();
    let mut service =
        HydrationService::open_at(SqliteSlotRepository::new(&conn), day(2026, 8, 28)).unwrap();

    service.add_glass().unwrap();
    service.add_glass().unwrap();
    service.reset().unwrap();
    assert_eq!(service.count(), 0);

    let stored: WaterTracker = SqliteSlotRepository::new(&conn)
        .load_json(WATER_SLOT)
        .unwrap();
    assert_eq!(stored.date, "2026-08-28");
}
