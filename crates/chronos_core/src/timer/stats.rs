//! Calendar-period rollover for the focus statistics ledger.
//!
//! Buckets reset the moment their period boundary is crossed relative to
//! the ledger's `last_sec` stamp, before new seconds are added. Weeks use
//! ISO-8601 numbering (Monday start, week 1 holds the year's first
//! Thursday); a calendar-year change additionally resets the week bucket
//! even when the ISO week number happens to match.

use crate::model::pomodoro::FocusStats;
use chrono::{DateTime, Datelike, TimeZone};

impl FocusStats {
    /// Fresh ledger stamped at `now`.
    pub fn started_at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            last_sec: now.timestamp_millis(),
            ..Self::default()
        }
    }

    /// Accrues `seconds` of focus time at instant `now`.
    ///
    /// Every bucket whose boundary elapsed since `last_sec` is reset to 0
    /// first; then all four buckets grow and `last_sec` is restamped. Period
    /// boundaries are evaluated in `now`'s timezone.
    pub fn increment<Tz: TimeZone>(&mut self, seconds: u64, now: &DateTime<Tz>) {
        self.roll_over(now);
        self.today += seconds;
        self.week += seconds;
        self.month += seconds;
        self.year += seconds;
        self.last_sec = now.timestamp_millis();
    }

    fn roll_over<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let Some(last) = now.timezone().timestamp_millis_opt(self.last_sec).single() else {
            // Unreadable stamp: treat as same-period rather than wiping data.
            return;
        };

        let year_changed = now.year() != last.year();
        if now.day() != last.day() || now.month() != last.month() || year_changed {
            self.today = 0;
        }
        if now.date_naive().iso_week().week() != last.date_naive().iso_week().week()
            || year_changed
        {
            self.week = 0;
        }
        if now.month() != last.month() || year_changed {
            self.month = 0;
        }
        if year_changed {
            self.year = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn ledger(stamp: &DateTime<Utc>) -> FocusStats {
        FocusStats {
            today: 120,
            week: 600,
            month: 3_000,
            year: 40_000,
            last_sec: stamp.timestamp_millis(),
        }
    }

    #[test]
    fn same_day_accrues_without_resets() {
        let mut stats = ledger(&at(2026, 8, 28, 9));
        stats.increment(60, &at(2026, 8, 28, 15));
        assert_eq!(stats.today, 180);
        assert_eq!(stats.week, 660);
    }

    #[test]
    fn day_boundary_resets_today_only() {
        // Friday to Saturday, same ISO week.
        let mut stats = ledger(&at(2026, 8, 28, 23));
        stats.increment(1, &at(2026, 8, 29, 0));
        assert_eq!(stats.today, 1);
        assert_eq!(stats.week, 601);
        assert_eq!(stats.month, 3_001);
        assert_eq!(stats.year, 40_001);
    }

    #[test]
    fn iso_week_boundary_resets_week() {
        // Sunday 2026-08-30 (week 35) to Monday 2026-08-31 (week 36).
        let mut stats = ledger(&at(2026, 8, 30, 12));
        stats.increment(1, &at(2026, 8, 31, 8));
        assert_eq!(stats.today, 1);
        assert_eq!(stats.week, 1);
        assert_eq!(stats.month, 3_001);
    }

    #[test]
    fn year_change_resets_every_bucket() {
        let mut stats = ledger(&at(2025, 12, 31, 23));
        stats.increment(1, &at(2026, 1, 1, 0));
        assert_eq!(stats.today, 1);
        assert_eq!(stats.week, 1);
        assert_eq!(stats.month, 1);
        assert_eq!(stats.year, 1);
    }

    #[test]
    fn unreadable_stamp_keeps_buckets() {
        let mut stats = ledger(&at(2026, 8, 28, 9));
        stats.last_sec = i64::MAX;
        stats.increment(1, &at(2026, 8, 28, 10));
        assert_eq!(stats.today, 121);
    }
}
