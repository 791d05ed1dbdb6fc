//! Food diary entry model
//!
//! A logged food: the nutrient snapshot captured at logging time plus the
//! quantity actually consumed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NutrientSnapshot;
use crate::units::VolumeUnit;

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" | "snacks" => Some(MealType::Snacks),
            _ => None,
        }
    }

    /// All meal types in diary display order
    pub fn all() -> [MealType; 4] {
        [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snacks,
        ]
    }
}

/// A food diary entry as returned by the backend
///
/// Aggregated nutrients for the entry are
/// `snapshot.nutrients * (quantity / snapshot.serving_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub entry_date: NaiveDate,
    pub meal_type: MealType,
    /// Amount consumed, in `unit`
    pub quantity: f64,
    /// Unit the quantity was logged in
    pub unit: String,
    #[serde(flatten)]
    pub snapshot: NutrientSnapshot,
}

impl FoodEntry {
    /// Fluid volume of this entry in milliliters, when logged in a volume unit
    ///
    /// Entries logged in ml, oz, or liter count toward water intake; anything
    /// else (grams, servings, pieces) does not.
    pub fn logged_volume_ml(&self) -> Option<f64> {
        let unit = VolumeUnit::from_str(&self.unit)?;
        Some(crate::units::convert(self.quantity, unit, VolumeUnit::Ml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(quantity: f64, unit: &str) -> FoodEntry {
        FoodEntry {
            entry_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            meal_type: MealType::Breakfast,
            quantity,
            unit: unit.to_string(),
            snapshot: NutrientSnapshot::default(),
        }
    }

    #[test]
    fn test_volume_units_count_as_water() {
        assert_eq!(entry(250.0, "ml").logged_volume_ml(), Some(250.0));
        assert_eq!(entry(1.5, "liter").logged_volume_ml(), Some(1500.0));
        let oz = entry(8.0, "oz").logged_volume_ml().unwrap();
        assert!((oz - 236.588).abs() < 0.001);
    }

    #[test]
    fn test_solid_units_are_not_water() {
        assert_eq!(entry(100.0, "g").logged_volume_ml(), None);
        assert_eq!(entry(2.0, "serving").logged_volume_ml(), None);
    }

    #[test]
    fn test_meal_type_strings() {
        assert_eq!(MealType::from_str("snacks"), Some(MealType::Snacks));
        assert_eq!(MealType::from_str("Breakfast"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_str("brunch"), None);
    }

    #[test]
    fn test_entry_deserializes_from_backend_shape() {
        let json = r#"{
            "entry_date": "2025-06-01",
            "meal_type": "lunch",
            "quantity": 150.0,
            "unit": "g",
            "calories": 200.0,
            "protein": 8.0,
            "serving_size": 100.0,
            "serving_unit": "g"
        }"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.meal_type, MealType::Lunch);
        assert!((entry.quantity - 150.0).abs() < 1e-9);
        assert!((entry.snapshot.nutrients.calories - 200.0).abs() < 1e-9);
        assert!((entry.snapshot.serving_size - 100.0).abs() < 1e-9);
    }
}
