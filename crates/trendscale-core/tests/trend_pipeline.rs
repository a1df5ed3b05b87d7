//! Integration tests for the store-to-engine pipeline.

use chrono::NaiveDate;
use trendscale_core::{Database, EnergyBalance, TrendAnalyzer, WeighIn};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
}

#[test]
fn full_pipeline_over_stored_history() {
    let db = Database::open_memory().unwrap();

    // Inserted out of order on purpose; the store must hand the engine an
    // ascending series.
    for (d, weight) in [(3, 79.8), (1, 80.0), (5, 79.4), (2, 79.9), (4, 79.6)] {
        db.upsert(&WeighIn::new(day(d), weight)).unwrap();
    }

    let weigh_ins = db.list().unwrap();
    assert_eq!(weigh_ins.len(), 5);
    assert!(
        weigh_ins.windows(2).all(|w| w[0].date < w[1].date),
        "store must list ascending by date"
    );

    let analyzer = TrendAnalyzer::with_settings(0.5, 7700.0);
    let series = analyzer.analyze(&weigh_ins);

    assert_eq!(series.points.len(), 5);
    assert_eq!(series.points[0].trend_kg, 80.0, "first point seeds the trend");

    let summary = series.summary.expect("five points must have a summary");
    assert!(summary.slope_kg_per_day < 0.0, "weight is falling");
    assert!(summary.kcal_per_day < 0.0, "deficit has negative energy");
    assert!(summary.slope_kg_per_day.is_finite());
}

#[test]
fn reweighing_a_day_changes_the_analysis_not_the_count() {
    let db = Database::open_memory().unwrap();
    db.upsert(&WeighIn::new(day(1), 80.0)).unwrap();
    db.upsert(&WeighIn::new(day(2), 80.0)).unwrap();

    let analyzer = TrendAnalyzer::new();
    let flat = analyzer.analyze(&db.list().unwrap());

    db.upsert(&WeighIn::new(day(2), 82.0)).unwrap();
    let rising = analyzer.analyze(&db.list().unwrap());

    assert_eq!(flat.points.len(), 2);
    assert_eq!(rising.points.len(), 2);
    assert!(
        rising.summary.unwrap().slope_kg_per_day > flat.summary.unwrap().slope_kg_per_day,
        "replacing a day's weight must feed through to the slope"
    );
}

#[test]
fn deleting_back_to_one_point_removes_the_summary() {
    let db = Database::open_memory().unwrap();
    db.upsert(&WeighIn::new(day(1), 80.0)).unwrap();
    db.upsert(&WeighIn::new(day(2), 79.5)).unwrap();

    let analyzer = TrendAnalyzer::new();
    assert!(analyzer.analyze(&db.list().unwrap()).summary.is_some());

    assert!(db.delete(day(2)).unwrap());
    let series = analyzer.analyze(&db.list().unwrap());
    assert_eq!(series.points.len(), 1);
    assert!(series.summary.is_none(), "one point cannot carry a slope");
}

#[test]
fn single_weigh_in_scenario() {
    let db = Database::open_memory().unwrap();
    db.upsert(&WeighIn::new(day(10), 82.3)).unwrap();

    let series = TrendAnalyzer::new().analyze(&db.list().unwrap());
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].trend_kg, 82.3);
    assert!(series.summary.is_none());

    let enriched = TrendAnalyzer::new().enrich(&series.points);
    assert!(enriched[0].slope_kg_per_day.is_none());
    assert!(enriched[0].kcal_per_day.is_none());
}

#[test]
fn steady_decline_scenario_reports_a_deficit() {
    let db = Database::open_memory().unwrap();
    for i in 0..8u32 {
        db.upsert(&WeighIn::new(day(1 + i), 80.0 - 0.1 * f64::from(i)))
            .unwrap();
    }

    let analyzer = TrendAnalyzer::with_settings(0.5, 7700.0);
    let series = analyzer.analyze(&db.list().unwrap());
    let summary = series.summary.unwrap();

    assert!(
        (summary.slope_kg_per_day + 0.1).abs() < 0.02,
        "slope {} should be close to -0.1 kg/day",
        summary.slope_kg_per_day
    );
    assert!(
        (summary.kcal_per_day + 770.0).abs() < 160.0,
        "energy {} should be close to -770 kcal/day",
        summary.kcal_per_day
    );
    assert_eq!(summary.balance(), EnergyBalance::Deficit);
}

#[test]
fn sparse_record_with_gaps_still_analyzes() {
    let db = Database::open_memory().unwrap();
    // Ten days of elapsed time across four entries
    for (d, weight) in [(1, 80.0), (4, 79.7), (8, 79.3), (11, 79.0)] {
        db.upsert(&WeighIn::new(day(d), weight)).unwrap();
    }

    let series = TrendAnalyzer::with_settings(1.0, 7700.0).analyze(&db.list().unwrap());
    let summary = series.summary.unwrap();

    // 1.0 kg lost over 10 calendar days with alpha = 1 (trend == raw)
    assert!(
        (summary.slope_kg_per_day + 0.1).abs() < 0.01,
        "calendar gaps must stretch the regression, got {}",
        summary.slope_kg_per_day
    );
}

#[test]
fn notes_survive_the_round_trip_to_analysis_input() {
    let db = Database::open_memory().unwrap();
    db.upsert(&WeighIn::with_note(day(1), 80.0, "new scale")).unwrap();

    let weigh_ins = db.list().unwrap();
    assert_eq!(weigh_ins[0].note.as_deref(), Some("new scale"));

    // The engine ignores notes entirely.
    let series = TrendAnalyzer::new().analyze(&weigh_ins);
    assert_eq!(series.points[0].weight_kg, 80.0);
}
