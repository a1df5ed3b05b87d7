//! Weight-trend analysis pipeline.
//!
//! Raw morning weigh-ins are noisy; water weight alone moves day-to-day
//! readings by amounts that swamp real change. This module smooths the
//! raw series with an exponentially weighted moving average, fits a
//! regression slope over a bounded trailing window of the smoothed
//! values, and converts that slope into an estimated daily energy
//! imbalance.
//!
//! The pipeline is pure: it holds no state between calls and recomputes
//! everything from the full weigh-in history each time. At one entry per
//! day that is never more than a few thousand points.

mod energy;
mod slope;
mod smoothing;

pub use energy::{kcal_per_day, EnergyBalance, MAINTENANCE_BAND_KCAL};
pub use slope::{estimate_slope, SLOPE_WINDOW};
pub use smoothing::compute_trend;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::observation::WeighIn;

/// One smoothed point: a day's raw weight next to its trend value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub trend_kg: f64,
}

/// Batch-level regression outcome for a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Daily rate of trend change, in kg/day.
    pub slope_kg_per_day: f64,
    /// Estimated daily energy imbalance, in kcal/day. Positive is a surplus.
    pub kcal_per_day: f64,
}

impl TrendSummary {
    /// Classified balance band for this summary.
    pub fn balance(&self) -> EnergyBalance {
        EnergyBalance::classify(self.kcal_per_day)
    }
}

/// Full analysis output: the smoothed series plus its summary scalars.
///
/// `summary` is `None` when fewer than two points exist, since a slope
/// needs at least two observations to mean anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    pub summary: Option<TrendSummary>,
}

impl TrendSeries {
    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.last()
    }
}

/// Presentation form of a trend point with the summary scalars broadcast
/// onto it.
///
/// The scalar fields are either absent on every point of a series or
/// present with the same value on every point; they describe the batch,
/// not the individual day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub trend_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope_kg_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kcal_per_day: Option<f64>,
}

/// Analyzer composing the smoothing, slope, and energy stages.
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    /// EWMA smoothing factor, in (0, 1].
    pub alpha: f64,
    /// Energy equivalent of one kilogram of body mass, in kcal.
    pub energy_per_kg: f64,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Default EWMA smoothing factor.
    pub const DEFAULT_ALPHA: f64 = 0.1;
    /// Default energy equivalent of one kilogram of body mass, in kcal.
    pub const DEFAULT_ENERGY_PER_KG: f64 = 7700.0;

    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            energy_per_kg: Self::DEFAULT_ENERGY_PER_KG,
        }
    }

    /// Create an analyzer with custom settings.
    pub fn with_settings(alpha: f64, energy_per_kg: f64) -> Self {
        Self {
            alpha,
            energy_per_kg,
        }
    }

    /// Run the full pipeline over a day-ordered weigh-in history.
    pub fn analyze(&self, weigh_ins: &[WeighIn]) -> TrendSeries {
        let points = compute_trend(weigh_ins, self.alpha);
        let summary = if points.len() < 2 {
            None
        } else {
            let slope_kg_per_day = estimate_slope(&points);
            Some(TrendSummary {
                slope_kg_per_day,
                kcal_per_day: kcal_per_day(slope_kg_per_day, self.energy_per_kg),
            })
        };
        TrendSeries { points, summary }
    }

    /// Broadcast the batch slope and energy figures onto every point.
    ///
    /// Series with fewer than two points come back with the scalar
    /// fields empty rather than zeroed, so downstream consumers can tell
    /// "no estimate" apart from "flat trend".
    pub fn enrich(&self, points: &[TrendPoint]) -> Vec<EnrichedPoint> {
        let summary = if points.len() < 2 {
            None
        } else {
            let slope_kg_per_day = estimate_slope(points);
            Some((
                slope_kg_per_day,
                kcal_per_day(slope_kg_per_day, self.energy_per_kg),
            ))
        };

        points
            .iter()
            .map(|point| EnrichedPoint {
                date: point.date,
                weight_kg: point.weight_kg,
                trend_kg: point.trend_kg,
                slope_kg_per_day: summary.map(|(slope, _)| slope),
                kcal_per_day: summary.map(|(_, kcal)| kcal),
            })
            .collect()
    }
}
