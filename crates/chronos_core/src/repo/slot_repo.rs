//! Durable slot contracts and SQLite implementation.
//!
//! Each feature area owns one named slot holding a JSON document; services
//! load their slot once and write the whole document back after every
//! mutation. The slot names are the storage keys the dashboard has always
//! used, so existing data stays readable.

use crate::db::DbError;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the calendar/to-do event collection.
pub const CALENDAR_SLOT: &str = "chronosCalendarData";
/// Slot holding the grades config + subject collection.
pub const GRADES_SLOT: &str = "chronosGradesData";
/// Slot holding the project collection.
pub const PROJECTS_SLOT: &str = "chronosProjectsData";
/// Slot holding the pomodoro focus/break durations.
pub const POMODORO_SETTINGS_SLOT: &str = "pomodoroSettings";
/// Slot holding the timer page's side to-do list.
pub const POMODORO_TODOS_SLOT: &str = "pomodoroTodos";
/// Slot holding the focus-seconds statistics ledger.
pub const POMODORO_STATS_SLOT: &str = "pomodoroStats";
/// Slot holding the daily water tracker.
pub const WATER_SLOT: &str = "chronos_water_tracker";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for slot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract for durable slots.
pub trait SlotRepository {
    /// Raw JSON text of a slot, `None` when the slot was never written.
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;

    /// Replaces the slot's JSON text wholesale.
    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Decodes a slot into its payload type.
    ///
    /// Absent, malformed, or wrong-shape data is treated as "no data" and
    /// yields the payload default; it is logged but never surfaced.
    fn load_json<T>(&self, key: &str) -> RepoResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.read_slot(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("event=slot_load module=repo status=recovered slot={key} error={err}");
                Ok(T::default())
            }
        }
    }

    /// Serializes a payload and writes it through to the slot.
    fn save_json<T>(&self, key: &str, value: &T) -> RepoResult<()>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value).map_err(RepoError::Serialize)?;
        self.write_slot(key, &raw)?;
        debug!("event=slot_write module=repo status=ok slot={key} bytes={}", raw.len());
        Ok(())
    }
}

/// SQLite-backed slot repository over the `slots` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
