//! User display preferences
//!
//! Explicit configuration passed into display conversions rather than
//! ambient state. Stored values stay in canonical units (kcal, kg, km, ml);
//! only display output is converted.

use serde::{Deserialize, Serialize};

use crate::models::GoalAdjustmentMode;
use crate::units::{convert, DistanceUnit, EnergyUnit, VolumeUnit, WeightUnit};

/// Display and calculation preferences for one user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub energy_unit: EnergyUnit,
    pub weight_unit: WeightUnit,
    pub distance_unit: DistanceUnit,
    pub water_unit: VolumeUnit,
    pub goal_adjustment_mode: GoalAdjustmentMode,
    /// Whether BMR counts toward net-energy expenditure
    pub include_bmr_in_net: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            energy_unit: EnergyUnit::Kcal,
            weight_unit: WeightUnit::Kg,
            distance_unit: DistanceUnit::Km,
            water_unit: VolumeUnit::Ml,
            goal_adjustment_mode: GoalAdjustmentMode::Dynamic,
            include_bmr_in_net: false,
        }
    }
}

impl Preferences {
    /// Convert a canonical kcal value to the preferred unit, whole-rounded
    pub fn display_energy(&self, kcal: f64) -> f64 {
        convert(kcal, EnergyUnit::Kcal, self.energy_unit).round()
    }

    /// Convert a canonical kg value to the preferred unit, one decimal
    pub fn display_weight(&self, kg: f64) -> f64 {
        (convert(kg, WeightUnit::Kg, self.weight_unit) * 10.0).round() / 10.0
    }

    /// Convert a canonical km value to the preferred unit, one decimal
    pub fn display_distance(&self, km: f64) -> f64 {
        (convert(km, DistanceUnit::Km, self.distance_unit) * 10.0).round() / 10.0
    }

    /// Convert a canonical ml value to the preferred unit, unrounded
    pub fn display_water(&self, ml: f64) -> f64 {
        convert(ml, VolumeUnit::Ml, self.water_unit)
    }
}
