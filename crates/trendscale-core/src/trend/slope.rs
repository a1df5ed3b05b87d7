//! Trend slope estimation over a bounded trailing window.

use super::TrendPoint;

/// Maximum number of trailing points used for slope estimation.
pub const SLOPE_WINDOW: usize = 7;

/// Estimate the daily rate of trend change, in kg/day.
///
/// Fits an ordinary least-squares line through the last
/// [`SLOPE_WINDOW`] trend values. The x coordinate of each point is its
/// whole-day calendar distance from the first point of the window, so a
/// record with gaps stretches the timeline instead of compressing it; a
/// missed week still counts as seven days of elapsed time.
///
/// Returns 0.0 when fewer than two points are available or when the
/// window spans no time at all. Callers never see NaN or infinity.
pub fn estimate_slope(points: &[TrendPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let start = points.len().saturating_sub(SLOPE_WINDOW);
    let window = &points[start..];

    let n = window.len() as f64;
    let first_date = window[0].date;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for point in window {
        let x = point.date.signed_duration_since(first_date).num_days() as f64;
        let y = point.trend_kg;
        sum_x += x;
        sum_y += y;
        sum_xy = x.mul_add(y, sum_xy);
        sum_x2 = x.mul_add(x, sum_x2);
    }

    // All window dates identical leaves the line direction undefined.
    let denominator = n.mul_add(sum_x2, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }

    n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, trend_kg: f64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            weight_kg: trend_kg,
            trend_kg,
        }
    }

    #[test]
    fn fewer_than_two_points_is_flat() {
        assert_eq!(estimate_slope(&[]), 0.0);
        assert_eq!(estimate_slope(&[point(1, 80.0)]), 0.0);
    }

    #[test]
    fn two_points_give_exact_rise_over_run() {
        // 1.0 kg over 10 days
        let points = vec![point(1, 70.0), point(11, 71.0)];
        assert_eq!(estimate_slope(&points), 0.1);
    }

    #[test]
    fn gaps_stretch_the_timeline() {
        // Adjacent entries two calendar days apart: the skipped day halves
        // the rate compared to consecutive days.
        let consecutive = vec![point(1, 70.0), point(2, 71.0)];
        let gapped = vec![point(1, 70.0), point(3, 71.0)];
        assert_eq!(estimate_slope(&consecutive), 1.0);
        assert_eq!(estimate_slope(&gapped), 0.5);
    }

    #[test]
    fn steady_decline_recovers_daily_rate() {
        let points: Vec<TrendPoint> = (0..7)
            .map(|i| point(1 + i, 80.0 - 0.1 * f64::from(i)))
            .collect();
        let slope = estimate_slope(&points);
        assert!(
            (slope + 0.1).abs() < 1e-9,
            "expected -0.1 kg/day, got {slope}"
        );
    }

    #[test]
    fn only_the_last_seven_points_matter() {
        // Noisy head, clean linear tail: the head must not leak into the fit
        let mut points = vec![point(1, 95.0), point(2, 60.0), point(3, 88.0)];
        for i in 0..7 {
            points.push(point(10 + i, 75.0 + 0.2 * f64::from(i)));
        }
        let full = estimate_slope(&points);
        let tail_only = estimate_slope(&points[3..]);
        assert_eq!(full, tail_only);
        assert!((full - 0.2).abs() < 1e-9);
    }

    #[test]
    fn identical_dates_fall_back_to_zero() {
        let points = vec![point(5, 70.0), point(5, 71.0), point(5, 72.0)];
        assert_eq!(estimate_slope(&points), 0.0);
    }

    #[test]
    fn slope_is_always_finite() {
        let points = vec![point(1, 70.0), point(2, 70.0)];
        assert!(estimate_slope(&points).is_finite());
    }
}
