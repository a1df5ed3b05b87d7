//! Exponential smoothing of raw weigh-ins.

use crate::observation::WeighIn;

use super::TrendPoint;

/// Smooth a day-ordered weigh-in series into a trend line.
///
/// The first observation seeds the trend exactly. Every later point pulls
/// the previous trend value toward the day's raw weight by `alpha`:
///
/// ```text
/// trend[i] = alpha * raw[i] + (1 - alpha) * trend[i - 1]
/// ```
///
/// With a small `alpha` the trend damps day-to-day water-weight noise and
/// reveals the underlying direction of change. `alpha` must lie in (0, 1];
/// the configuration boundary enforces the range, this fold does not.
///
/// Input must be sorted ascending by date with at most one entry per day,
/// which is exactly the store's list contract. An empty slice yields an
/// empty series.
pub fn compute_trend(weigh_ins: &[WeighIn], alpha: f64) -> Vec<TrendPoint> {
    let mut points = Vec::with_capacity(weigh_ins.len());
    let mut prev_trend: Option<f64> = None;

    for weigh_in in weigh_ins {
        let trend_kg = match prev_trend {
            None => weigh_in.weight_kg,
            Some(prev) => alpha.mul_add(weigh_in.weight_kg, (1.0 - alpha) * prev),
        };
        points.push(TrendPoint {
            date: weigh_in.date,
            weight_kg: weigh_in.weight_kg,
            trend_kg,
        });
        prev_trend = Some(trend_kg);
    }

    points
}
