//! TOML-based application configuration.
//!
//! Stores the trend-engine parameters and display preferences.
//! Configuration is stored at `~/.config/trendscale/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::trend::TrendAnalyzer;
use crate::units::Unit;

/// Trend-engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// EWMA smoothing factor, in (0, 1].
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Energy equivalent of one kilogram of body mass, in kcal.
    #[serde(default = "default_energy_per_kg")]
    pub energy_per_kg: f64,
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit used for input and output. Storage stays in kilograms.
    #[serde(default)]
    pub unit: Unit,
    /// Number of trailing entries shown by the chart.
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/trendscale/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub trend: TrendConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_alpha() -> f64 {
    TrendAnalyzer::DEFAULT_ALPHA
}
fn default_energy_per_kg() -> f64 {
    TrendAnalyzer::DEFAULT_ENERGY_PER_KG
}
fn default_chart_days() -> u32 {
    30
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            energy_per_kg: default_energy_per_kg(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Kg,
            chart_days: default_chart_days(),
        }
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(invalid(key, "config key is empty"));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| invalid(key, "unknown config key"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| invalid(key, "unknown config key"))?;

                let new_value = match existing {
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(key, format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(
                                key,
                                format!("cannot parse '{value}' as number"),
                            ));
                        }
                    }
                    _ => serde_json::Value::String(value.to_string()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| invalid(key, "unknown config key"))?;
        }

        Err(invalid(key, "unknown config key"))
    }

    /// Check value ranges. Runs on every load and mutation.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.trend.alpha > 0.0 && self.trend.alpha <= 1.0) {
            return Err(invalid(
                "trend.alpha",
                format!("must be in (0, 1], got {}", self.trend.alpha),
            ));
        }
        if !(self.trend.energy_per_kg.is_finite() && self.trend.energy_per_kg > 0.0) {
            return Err(invalid(
                "trend.energy_per_kg",
                format!("must be a positive number, got {}", self.trend.energy_per_kg),
            ));
        }
        if self.display.chart_days == 0 {
            return Err(invalid("display.chart_days", "must be at least 1"));
        }
        Ok(())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be parsed or
    /// fails validation, or if the default config cannot be written.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// the result fails validation, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning defaults on any error.
    ///
    /// Read-only paths use this so a missing or unreadable config never
    /// blocks reporting.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
