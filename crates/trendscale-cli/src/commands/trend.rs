//! Trend analysis commands.

use clap::Subcommand;

use trendscale_core::report;
use trendscale_core::{Config, Database, TrendAnalyzer};

#[derive(Subcommand)]
pub enum TrendAction {
    /// Current trend weight, slope, and energy balance
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Date/actual/trend history table, most recent first
    History {
        /// Number of entries to show (default: display.chart_days)
        #[arg(long)]
        days: Option<u32>,
    },
    /// ASCII chart of the recent trend
    Chart {
        /// Number of entries to plot (default: display.chart_days)
        #[arg(long)]
        days: Option<u32>,
    },
}

pub fn run(action: TrendAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let unit = config.display.unit;
    let analyzer = TrendAnalyzer::with_settings(config.trend.alpha, config.trend.energy_per_kg);

    let db = Database::open()?;
    let series = analyzer.analyze(&db.list()?);

    match action {
        TrendAction::Status { json } => {
            if json {
                let enriched = analyzer.enrich(&series.points);
                let status = serde_json::json!({
                    "latest": enriched.last(),
                    "summary": series.summary,
                    "balance": series.summary.map(|s| s.balance()),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print!("{}", report::render_status(&series, unit, analyzer.alpha));
            }
        }
        TrendAction::History { days } => {
            let limit = days.unwrap_or(config.display.chart_days) as usize;
            print!("{}", report::render_history(&series, unit, Some(limit)));
        }
        TrendAction::Chart { days } => {
            let max_points = days.unwrap_or(config.display.chart_days) as usize;
            print!("{}", report::render_chart(&series, unit, max_points));
        }
    }
    Ok(())
}
