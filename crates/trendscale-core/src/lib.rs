//! # Trendscale Core Library
//!
//! This library provides the core logic for Trendscale, a daily body-weight
//! trend tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary built as a thin layer over this
//! library.
//!
//! ## Architecture
//!
//! - **Trend Engine**: Pure functions that smooth raw weigh-ins with an
//!   exponentially weighted moving average, fit a bounded-window regression
//!   slope, and convert the slope into an estimated daily energy imbalance
//! - **Storage**: SQLite-based weigh-in storage and TOML-based configuration
//! - **Reporting**: Plain-text status, history, and chart rendering
//!
//! ## Key Components
//!
//! - [`TrendAnalyzer`]: Composes the smoothing, slope, and energy stages
//! - [`Database`]: Weigh-in persistence, one entry per calendar day
//! - [`Config`]: Application configuration management
//!
//! The engine holds no state between calls; every analysis is a full
//! recomputation over the stored history.

pub mod error;
pub mod observation;
pub mod trend;
pub mod units;
pub mod storage;
pub mod report;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use observation::WeighIn;
pub use storage::{Config, Database};
pub use trend::{
    compute_trend, estimate_slope, kcal_per_day, EnergyBalance, EnrichedPoint, TrendAnalyzer,
    TrendPoint, TrendSeries, TrendSummary,
};
pub use units::{format_slope, format_weight, Unit, KG_TO_LB};
