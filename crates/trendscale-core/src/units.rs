//! Weight unit conversion and display formatting.
//!
//! Kilograms are the canonical storage unit everywhere in the crate.
//! Pounds exist only at the input and display boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Kilograms-to-pounds conversion factor.
pub const KG_TO_LB: f64 = 2.20462;

/// Display unit for weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Lb,
}

impl Unit {
    /// Convert a canonical kilogram value into this unit.
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            Unit::Kg => kg,
            Unit::Lb => kg * KG_TO_LB,
        }
    }

    /// Convert a value in this unit into canonical kilograms.
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            Unit::Kg => value,
            Unit::Lb => value / KG_TO_LB,
        }
    }

    /// Suffix used in formatted output.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Lb => "lb",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lb),
            _ => Err(ValidationError::InvalidValue {
                field: "unit".to_string(),
                message: format!("expected 'kg' or 'lb', got '{s}'"),
            }),
        }
    }
}

/// Format a canonical kilogram weight for display, e.g. "70.4 kg".
pub fn format_weight(kg: f64, unit: Unit) -> String {
    format!("{:.1} {}", unit.from_kg(kg), unit.suffix())
}

/// Format a trend slope for display, e.g. "-0.08 kg/day".
pub fn format_slope(kg_per_day: f64, unit: Unit) -> String {
    format!("{:.2} {}/day", unit.from_kg(kg_per_day), unit.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kg_round_trips_through_lb() {
        let kg = 70.0;
        let lb = Unit::Lb.from_kg(kg);
        assert!((lb - 154.3234).abs() < 1e-4);
        assert!((Unit::Lb.to_kg(lb) - kg).abs() < 1e-9);
    }

    #[test]
    fn kg_is_identity() {
        assert_eq!(Unit::Kg.from_kg(70.0), 70.0);
        assert_eq!(Unit::Kg.to_kg(70.0), 70.0);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("kg".parse::<Unit>().unwrap(), Unit::Kg);
        assert_eq!("LB".parse::<Unit>().unwrap(), Unit::Lb);
        assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Lb);
        assert!("stone".parse::<Unit>().is_err());
    }

    #[test]
    fn weight_formats_to_one_decimal() {
        assert_eq!(format_weight(70.04, Unit::Kg), "70.0 kg");
        assert_eq!(format_weight(70.0, Unit::Lb), "154.3 lb");
    }

    #[test]
    fn slope_formats_to_two_decimals() {
        assert_eq!(format_slope(-0.125, Unit::Kg), "-0.12 kg/day");
        assert_eq!(format_slope(0.1, Unit::Kg), "0.10 kg/day");
    }

    #[test]
    fn unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Kg).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&Unit::Lb).unwrap(), "\"lb\"");
    }
}
