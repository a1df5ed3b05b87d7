//! Plain-text rendering of trend analyses.
//!
//! Everything here consumes already-computed series; no analytical logic
//! lives in this module.

use crate::trend::TrendSeries;
use crate::units::{format_slope, format_weight, Unit};

const RULE_WIDTH: usize = 52;
const BAR_WIDTH: usize = 40;

/// Render the current-status block: latest trend and raw weight, slope,
/// energy balance, and the analysis parameters.
pub fn render_status(series: &TrendSeries, unit: Unit, alpha: f64) -> String {
    let mut output = String::from("\nCurrent Trend\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    let Some(latest) = series.latest() else {
        output.push_str("No weigh-ins recorded yet.\n");
        output.push_str("Record one with: trendscale weigh add <WEIGHT>\n");
        return output;
    };

    output.push_str(&format!(
        "  Trend weight:  {}\n",
        format_weight(latest.trend_kg, unit)
    ));
    output.push_str(&format!(
        "  Last weigh-in: {} ({})\n",
        format_weight(latest.weight_kg, unit),
        latest.date
    ));

    match series.summary {
        Some(summary) => {
            output.push_str(&format!(
                "  Slope:         {}\n",
                format_slope(summary.slope_kg_per_day, unit)
            ));
            output.push_str(&format!(
                "  Energy:        {} kcal/day  {}\n",
                signed_kcal(summary.kcal_per_day),
                summary.balance().description()
            ));
        }
        None => {
            output.push_str("  Slope:         not enough data (need 2+ weigh-ins)\n");
        }
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "  alpha = {:.2}, {} weigh-ins recorded\n",
        alpha,
        series.points.len()
    ));
    output
}

/// Render a date/actual/trend table, most recent first.
pub fn render_history(series: &TrendSeries, unit: Unit, limit: Option<usize>) -> String {
    let mut output = String::from("\nWeigh-in History\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    if series.points.is_empty() {
        output.push_str("No weigh-ins recorded yet.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<12} {:>12} {:>12}\n",
        "Date", "Actual", "Trend"
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    let shown = limit.unwrap_or(series.points.len());
    for point in series.points.iter().rev().take(shown) {
        output.push_str(&format!(
            "{:<12} {:>12} {:>12}\n",
            point.date.to_string(),
            format_weight(point.weight_kg, unit),
            format_weight(point.trend_kg, unit),
        ));
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');
    output
}

/// Render an ASCII chart of the trailing `max_points` trend entries.
///
/// Bars plot the smoothed trend; the raw weight for each day is printed
/// alongside so outliers stay visible.
pub fn render_chart(series: &TrendSeries, unit: Unit, max_points: usize) -> String {
    let mut output = String::from("\nWeight Trend\n");
    output.push_str(&"─".repeat(RULE_WIDTH + BAR_WIDTH));
    output.push('\n');

    if series.points.is_empty() {
        output.push_str("No weigh-ins recorded yet.\n");
        return output;
    }

    let start = series.points.len().saturating_sub(max_points.max(1));
    let window = &series.points[start..];

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for point in window {
        low = low.min(point.trend_kg).min(point.weight_kg);
        high = high.max(point.trend_kg).max(point.weight_kg);
    }
    // A flat series still needs a nonzero span to scale against.
    let span = (high - low).max(0.1);

    for point in window {
        let fill = ((point.trend_kg - low) / span * BAR_WIDTH as f64)
            .round()
            .clamp(0.0, BAR_WIDTH as f64) as usize;
        let bar = "█".repeat(fill);
        let empty = " ".repeat(BAR_WIDTH - fill);
        output.push_str(&format!(
            "{} {}{} {:>7} (raw {:.1})\n",
            point.date,
            bar,
            empty,
            format!("{:.1}", unit.from_kg(point.trend_kg)),
            unit.from_kg(point.weight_kg),
        ));
    }

    output.push_str(&"─".repeat(RULE_WIDTH + BAR_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "trend bars span {:.1} to {:.1} {}, last {} entries\n",
        unit.from_kg(low),
        unit.from_kg(high),
        unit.suffix(),
        window.len()
    ));
    output
}

/// Whole-kcal figure with an explicit plus sign on surpluses.
fn signed_kcal(kcal: f64) -> String {
    let rounded = kcal.round();
    if rounded > 0.0 {
        format!("+{rounded:.0}")
    } else if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}
