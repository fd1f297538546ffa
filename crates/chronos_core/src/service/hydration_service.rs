//! Hydration widget service: a per-day glasses-of-water counter.
//!
//! The stored tracker carries the day it belongs to; opening on a later
//! day (or with an unrecognized date string) resets the count to zero and
//! persists the fresh tracker immediately.

use crate::model::hydration::{WaterTracker, WATER_GOAL};
use crate::repo::slot_repo::{RepoResult, SlotRepository, WATER_SLOT};
use chrono::{Local, NaiveDate};
use log::info;

pub struct HydrationService<R: SlotRepository> {
    repo: R,
    tracker: WaterTracker,
    today: NaiveDate,
}

impl<R: SlotRepository> HydrationService<R> {
    /// Loads the tracker for the current local day.
    pub fn open(repo: R) -> RepoResult<Self> {
        Self::open_at(repo, Local::now().date_naive())
    }

    /// Loads the tracker for an explicit day; a stale or unreadable stored
    /// date resets the count and writes the reset through.
    pub fn open_at(repo: R, today: NaiveDate) -> RepoResult<Self> {
        let stored: WaterTracker = repo.load_json(WATER_SLOT)?;
        let tracker = if stored.is_for_day(today) {
            stored
        } else {
            let fresh = WaterTracker::for_day(today);
            repo.save_json(WATER_SLOT, &fresh)?;
            info!(
                "event=water_reset module=hydration status=ok day={}",
                fresh.date
            );
            fresh
        };
        Ok(Self {
            repo,
            tracker,
            today,
        })
    }

    pub fn count(&self) -> u32 {
        self.tracker.count
    }

    pub fn goal(&self) -> u32 {
        WATER_GOAL
    }

    /// Records one more glass and returns the new count.
    pub fn add_glass(&mut self) -> RepoResult<u32> {
        self.tracker.count += 1;
        self.repo.save_json(WATER_SLOT, &self.tracker)?;
        Ok(self.tracker.count)
    }

    /// Starts the current day over at zero.
    pub fn reset(&mut self) -> RepoResult<()> {
        self.tracker = WaterTracker::for_day(self.today);
        self.repo.save_json(WATER_SLOT, &self.tracker)
    }
}
