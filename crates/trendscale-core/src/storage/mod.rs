mod config;
pub mod database;

pub use config::{Config, DisplayConfig, TrendConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/trendscale[-dev]/` based on TRENDSCALE_ENV.
///
/// Set TRENDSCALE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TRENDSCALE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("trendscale-dev")
    } else {
        base_dir.join("trendscale")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
