//! Daily weigh-in records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single weigh-in, at most one per calendar day.
///
/// Weight is always stored in kilograms; display-unit conversion happens
/// at the presentation boundary. Recording a second weigh-in for the same
/// day replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighIn {
    pub date: NaiveDate,
    pub weight_kg: f64,
    /// Optional free-text annotation, e.g. "after vacation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeighIn {
    /// Create a weigh-in without a note.
    pub fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg,
            note: None,
        }
    }

    /// Create a weigh-in with a note attached.
    pub fn with_note(date: NaiveDate, weight_kg: f64, note: impl Into<String>) -> Self {
        Self {
            date,
            weight_kg,
            note: Some(note.into()),
        }
    }
}
