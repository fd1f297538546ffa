//! Hydration widget payload (`chronos_water_tracker`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily glasses-of-water goal shown by the widget.
pub const WATER_GOAL: u32 = 8;

/// Per-day water count; `date` is the day the count belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WaterTracker {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub count: u32,
}

impl WaterTracker {
    /// Fresh tracker for the given day.
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            date: day.format("%Y-%m-%d").to_string(),
            count: 0,
        }
    }

    /// Whether the stored count belongs to `day`. Any unrecognized stored
    /// date string counts as stale and triggers a reset.
    pub fn is_for_day(&self, day: NaiveDate) -> bool {
        self.date == day.format("%Y-%m-%d").to_string()
    }
}
