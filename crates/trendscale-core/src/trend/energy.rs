//! Slope-to-energy conversion and balance classification.
//!
//! Sign convention: the conversion preserves the slope's sign. A positive
//! slope (trend weight rising) yields a positive kcal/day figure, reported
//! as a caloric surplus; a negative slope yields a negative figure, a
//! deficit. Anything within the maintenance band counts as maintenance.

use serde::{Deserialize, Serialize};

/// Half-width of the maintenance band, in kcal/day.
pub const MAINTENANCE_BAND_KCAL: f64 = 100.0;

/// Convert a trend slope into an estimated daily energy imbalance.
///
/// `energy_per_kg` is the energy equivalent of one kilogram of body-mass
/// change (around 7700 kcal by the common rule of thumb). The estimate
/// assumes the recent trend reflects a steady energy imbalance rather
/// than water-weight swings, which is exactly what the smoothing stage
/// is there to remove.
pub fn kcal_per_day(slope_kg_per_day: f64, energy_per_kg: f64) -> f64 {
    slope_kg_per_day * energy_per_kg
}

/// Classified energy balance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyBalance {
    Deficit,
    Maintenance,
    Surplus,
}

impl EnergyBalance {
    /// Classify a daily energy imbalance into a band.
    ///
    /// Values of exactly plus or minus the band width still count as
    /// maintenance.
    pub fn classify(kcal_per_day: f64) -> Self {
        if kcal_per_day < -MAINTENANCE_BAND_KCAL {
            Self::Deficit
        } else if kcal_per_day > MAINTENANCE_BAND_KCAL {
            Self::Surplus
        } else {
            Self::Maintenance
        }
    }

    /// Human-readable description for status output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Deficit => "Deficit (losing weight)",
            Self::Surplus => "Surplus (gaining weight)",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_sign() {
        assert_eq!(kcal_per_day(-0.1, 7700.0), -770.0);
        assert_eq!(kcal_per_day(0.1, 7700.0), 770.0);
        assert_eq!(kcal_per_day(0.0, 7700.0), 0.0);
    }

    #[test]
    fn conversion_scales_with_energy_density() {
        assert_eq!(kcal_per_day(0.5, 1000.0), 500.0);
        assert_eq!(kcal_per_day(0.5, 2000.0), 1000.0);
    }

    #[test]
    fn classify_band_edges() {
        assert_eq!(EnergyBalance::classify(-101.0), EnergyBalance::Deficit);
        assert_eq!(EnergyBalance::classify(-100.0), EnergyBalance::Maintenance);
        assert_eq!(EnergyBalance::classify(0.0), EnergyBalance::Maintenance);
        assert_eq!(EnergyBalance::classify(100.0), EnergyBalance::Maintenance);
        assert_eq!(EnergyBalance::classify(101.0), EnergyBalance::Surplus);
    }

    #[test]
    fn descriptions_name_the_direction() {
        assert_eq!(
            EnergyBalance::Deficit.description(),
            "Deficit (losing weight)"
        );
        assert_eq!(
            EnergyBalance::Surplus.description(),
            "Surplus (gaining weight)"
        );
        assert_eq!(EnergyBalance::Maintenance.description(), "Maintenance");
    }
}
