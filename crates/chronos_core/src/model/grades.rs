//! Grade-book model: semester configuration plus subjects.
//!
//! # Responsibility
//! - Define the document stored in the `chronosGradesData` slot.
//! - Decode historic payloads leniently: absent or non-numeric grade values
//!   read as 0, absent config as the documented defaults.

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_SEMESTERS_PER_YEAR: u32 = 2;
pub const DEFAULT_CURRENT_SEMESTER: u32 = 1;

/// Whole-slot document: one config block and the subject collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradesBook {
    #[serde(default)]
    pub config: GradesConfig,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradesConfig {
    #[serde(default = "default_semesters_per_year")]
    pub semesters_per_year: u32,
    #[serde(default = "default_current_semester")]
    pub current_semester: u32,
}

fn default_semesters_per_year() -> u32 {
    DEFAULT_SEMESTERS_PER_YEAR
}

fn default_current_semester() -> u32 {
    DEFAULT_CURRENT_SEMESTER
}

impl Default for GradesConfig {
    fn default() -> Self {
        Self {
            semesters_per_year: DEFAULT_SEMESTERS_PER_YEAR,
            current_semester: DEFAULT_CURRENT_SEMESTER,
        }
    }
}

/// One subject card.
///
/// `semester` defaults to 0 on absence, which matches no semester tab, so a
/// record that never carried the field stays invisible rather than being
/// adopted by semester 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Millisecond-derived numeric id; 0 on an unsaved draft.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub contact: String,
    /// Goal grade percentage; 0 when absent or non-numeric.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub goal: f64,
    /// Current grade percentage; 0 when absent or non-numeric.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub current: f64,
    /// Free-text assessment weightages.
    #[serde(default)]
    pub weightages: String,
    #[serde(default)]
    pub semester: u32,
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
