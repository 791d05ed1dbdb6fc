//! Daily goal model
//!
//! Per-day nutrition and energy targets, always stored in canonical units
//! (kcal, grams, ml) regardless of the user's display preference.

use serde::{Deserialize, Serialize};

/// Per-day nutrition and energy targets
///
/// Fields absent from a backend record fall back to the application
/// defaults, matching the server's behavior for users without saved goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    #[serde(default = "default_calories")]
    pub calories: f64,
    #[serde(default = "default_protein")]
    pub protein: f64, // grams
    #[serde(default = "default_carbs")]
    pub carbs: f64, // grams
    #[serde(default = "default_fat")]
    pub fat: f64, // grams
    /// Default is 8 glasses of 240 ml
    #[serde(default = "default_water_goal_ml")]
    pub water_goal_ml: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein: default_protein(),
            carbs: default_carbs(),
            fat: default_fat(),
            water_goal_ml: default_water_goal_ml(),
        }
    }
}

fn default_calories() -> f64 {
    2000.0
}

fn default_protein() -> f64 {
    150.0
}

fn default_carbs() -> f64 {
    250.0
}

fn default_fat() -> f64 {
    67.0
}

fn default_water_goal_ml() -> f64 {
    1920.0
}

/// How exercise expenditure affects the daily calorie budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalAdjustmentMode {
    /// Burned calories augment the effective budget
    #[default]
    Dynamic,
    /// The budget stays constant regardless of exercise
    Fixed,
}

impl GoalAdjustmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalAdjustmentMode::Dynamic => "dynamic",
            GoalAdjustmentMode::Fixed => "fixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let goals = GoalSet::default();
        assert!((goals.calories - 2000.0).abs() < 1e-9);
        assert!((goals.protein - 150.0).abs() < 1e-9);
        assert!((goals.water_goal_ml - 1920.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let goals: GoalSet = serde_json::from_str(r#"{"calories": 1800}"#).unwrap();
        assert!((goals.calories - 1800.0).abs() < 1e-9);
        assert!((goals.carbs - 250.0).abs() < 1e-9);
        assert!((goals.fat - 67.0).abs() < 1e-9);
    }

    #[test]
    fn test_mode_serde() {
        let mode: GoalAdjustmentMode = serde_json::from_str("\"fixed\"").unwrap();
        assert_eq!(mode, GoalAdjustmentMode::Fixed);
        assert_eq!(GoalAdjustmentMode::default(), GoalAdjustmentMode::Dynamic);
    }
}
