//! Daily nutrition aggregation
//!
//! Reduces food diary entries into summed totals. Totals stay unrounded
//! during accumulation; rounding is a display concern.

use std::collections::HashMap;

use crate::error::{Result, ValidationError};
use crate::models::{FoodEntry, MealType, Nutrients};

/// Summed intake for a set of food entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeTotals {
    pub nutrients: Nutrients,
    /// Fluid intake in milliliters, from entries logged in volume units
    pub water_ml: f64,
}

impl IntakeTotals {
    /// Create a new IntakeTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    fn accumulate(&mut self, entry: &FoodEntry) -> Result<()> {
        let serving = entry.snapshot.serving_size;
        if !(serving > 0.0) {
            return Err(ValidationError::InvalidServingSize(serving));
        }

        let scale = entry.quantity / serving;
        self.nutrients = self.nutrients.add(&entry.snapshot.nutrients.scale(scale));

        if let Some(ml) = entry.logged_volume_ml() {
            self.water_ml += ml;
        }

        Ok(())
    }
}

/// Sum food entries into daily totals
///
/// An empty slice yields all-zero totals. An entry whose snapshot carries a
/// zero, negative, or NaN serving size is rejected rather than silently
/// producing Infinity; the caller decides whether to skip it or abort.
pub fn aggregate(entries: &[FoodEntry]) -> Result<IntakeTotals> {
    let mut totals = IntakeTotals::zero();
    for entry in entries {
        totals.accumulate(entry)?;
    }
    Ok(totals)
}

/// Sum food entries into per-meal totals for diary display
///
/// Only meals with at least one entry appear in the result.
pub fn aggregate_by_meal(entries: &[FoodEntry]) -> Result<HashMap<MealType, IntakeTotals>> {
    let mut meals: HashMap<MealType, IntakeTotals> = HashMap::new();
    for entry in entries {
        meals.entry(entry.meal_type).or_default().accumulate(entry)?;
    }
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientSnapshot;
    use chrono::NaiveDate;

    fn entry(meal_type: MealType, quantity: f64, unit: &str, calories: f64) -> FoodEntry {
        FoodEntry {
            entry_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            meal_type,
            quantity,
            unit: unit.to_string(),
            snapshot: NutrientSnapshot {
                nutrients: Nutrients {
                    calories,
                    protein: calories / 20.0,
                    ..Nutrients::zero()
                },
                serving_size: 100.0,
                serving_unit: unit.to_string(),
            },
        }
    }

    #[test]
    fn test_empty_aggregation_is_zero() {
        let totals = aggregate(&[]).unwrap();
        assert_eq!(totals, IntakeTotals::zero());
    }

    #[test]
    fn test_scaled_by_serving_size() {
        // 150 g of a food with 200 kcal per 100 g serving = 300 kcal
        let totals = aggregate(&[entry(MealType::Lunch, 150.0, "g", 200.0)]).unwrap();
        assert!((totals.nutrients.calories - 300.0).abs() < 1e-9);
        assert!((totals.nutrients.protein - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_does_not_matter() {
        let entries = vec![
            entry(MealType::Breakfast, 50.0, "g", 180.0),
            entry(MealType::Lunch, 220.0, "g", 95.0),
            entry(MealType::Dinner, 130.0, "g", 410.0),
        ];
        let forward = aggregate(&entries).unwrap();

        let mut reversed = entries.clone();
        reversed.reverse();
        let backward = aggregate(&reversed).unwrap();

        assert!((forward.nutrients.calories - backward.nutrients.calories).abs() < 1e-9);
        assert!((forward.nutrients.protein - backward.nutrients.protein).abs() < 1e-9);
    }

    #[test]
    fn test_water_from_volume_entries() {
        let entries = vec![
            entry(MealType::Breakfast, 250.0, "ml", 0.0),
            entry(MealType::Lunch, 1.0, "liter", 0.0),
            entry(MealType::Dinner, 100.0, "g", 120.0),
        ];
        let totals = aggregate(&entries).unwrap();
        assert!((totals.water_ml - 1250.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_serving_size_rejected() {
        let mut bad = entry(MealType::Lunch, 100.0, "g", 200.0);
        bad.snapshot.serving_size = 0.0;
        let err = aggregate(&[bad]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidServingSize(_)));
    }

    #[test]
    fn test_aggregate_by_meal() {
        let entries = vec![
            entry(MealType::Breakfast, 100.0, "g", 300.0),
            entry(MealType::Breakfast, 50.0, "g", 100.0),
            entry(MealType::Dinner, 200.0, "g", 250.0),
        ];
        let meals = aggregate_by_meal(&entries).unwrap();
        assert_eq!(meals.len(), 2);
        assert!((meals[&MealType::Breakfast].nutrients.calories - 350.0).abs() < 1e-9);
        assert!((meals[&MealType::Dinner].nutrients.calories - 500.0).abs() < 1e-9);
        assert!(!meals.contains_key(&MealType::Lunch));
    }
}
