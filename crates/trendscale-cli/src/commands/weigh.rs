//! Weigh-in recording commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use trendscale_core::units::format_weight;
use trendscale_core::{Config, Database, WeighIn};

#[derive(Subcommand)]
pub enum WeighAction {
    /// Record a weigh-in, replacing any existing entry for the day
    Add {
        /// Weight in the configured display unit
        weight: f64,
        /// Day of the weigh-in (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Free-text note, e.g. "after vacation"
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete the weigh-in for a day
    Delete {
        /// Day to delete (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// List recorded weigh-ins, oldest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: WeighAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let unit = config.display.unit;
    let db = Database::open()?;

    match action {
        WeighAction::Add { weight, date, note } => {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(format!("weight must be a positive number, got {weight}").into());
            }
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let weigh_in = WeighIn {
                date,
                weight_kg: unit.to_kg(weight),
                note,
            };
            db.upsert(&weigh_in)?;
            println!(
                "Recorded {} on {}",
                format_weight(weigh_in.weight_kg, unit),
                weigh_in.date
            );
        }
        WeighAction::Delete { date } => {
            if db.delete(date)? {
                println!("Deleted weigh-in for {date}");
            } else {
                eprintln!("no weigh-in recorded for {date}");
                std::process::exit(1);
            }
        }
        WeighAction::List { json } => {
            let weigh_ins = db.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&weigh_ins)?);
            } else if weigh_ins.is_empty() {
                println!("No weigh-ins recorded yet.");
            } else {
                for weigh_in in &weigh_ins {
                    match &weigh_in.note {
                        Some(note) => println!(
                            "{}  {}  # {}",
                            weigh_in.date,
                            format_weight(weigh_in.weight_kg, unit),
                            note
                        ),
                        None => println!(
                            "{}  {}",
                            weigh_in.date,
                            format_weight(weigh_in.weight_kg, unit)
                        ),
                    }
                }
            }
        }
    }
    Ok(())
}
