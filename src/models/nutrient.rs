//! Shared nutrient data structures
//!
//! Used across food entries, meal totals, and daily totals. Values are
//! always denominated in canonical units: kcal for energy, grams for macros,
//! mg/µg for micros.

use serde::{Deserialize, Serialize};

/// Nutrient values, either per reference serving or as an aggregated total
///
/// Fields absent from a backend record deserialize to 0 so a sparse snapshot
/// never propagates NaN through an aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64, // grams
    #[serde(default)]
    pub carbs: f64, // grams
    #[serde(default)]
    pub fat: f64, // grams
    #[serde(default)]
    pub saturated_fat: f64, // grams
    #[serde(default)]
    pub polyunsaturated_fat: f64, // grams
    #[serde(default)]
    pub monounsaturated_fat: f64, // grams
    #[serde(default)]
    pub trans_fat: f64, // grams
    #[serde(default)]
    pub cholesterol: f64, // milligrams
    #[serde(default)]
    pub sodium: f64, // milligrams
    #[serde(default)]
    pub potassium: f64, // milligrams
    #[serde(default)]
    pub dietary_fiber: f64, // grams
    #[serde(default)]
    pub sugars: f64, // grams
    #[serde(default)]
    pub vitamin_a: f64, // micrograms
    #[serde(default)]
    pub vitamin_c: f64, // milligrams
    #[serde(default)]
    pub calcium: f64, // milligrams
    #[serde(default)]
    pub iron: f64, // milligrams
}

impl Nutrients {
    /// Create a new Nutrients with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrient values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            saturated_fat: self.saturated_fat * multiplier,
            polyunsaturated_fat: self.polyunsaturated_fat * multiplier,
            monounsaturated_fat: self.monounsaturated_fat * multiplier,
            trans_fat: self.trans_fat * multiplier,
            cholesterol: self.cholesterol * multiplier,
            sodium: self.sodium * multiplier,
            potassium: self.potassium * multiplier,
            dietary_fiber: self.dietary_fiber * multiplier,
            sugars: self.sugars * multiplier,
            vitamin_a: self.vitamin_a * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
        }
    }

    /// Add another set of nutrient values to this one
    pub fn add(&self, other: &Nutrients) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            saturated_fat: self.saturated_fat + other.saturated_fat,
            polyunsaturated_fat: self.polyunsaturated_fat + other.polyunsaturated_fat,
            monounsaturated_fat: self.monounsaturated_fat + other.monounsaturated_fat,
            trans_fat: self.trans_fat + other.trans_fat,
            cholesterol: self.cholesterol + other.cholesterol,
            sodium: self.sodium + other.sodium,
            potassium: self.potassium + other.potassium,
            dietary_fiber: self.dietary_fiber + other.dietary_fiber,
            sugars: self.sugars + other.sugars,
            vitamin_a: self.vitamin_a + other.vitamin_a,
            vitamin_c: self.vitamin_c + other.vitamin_c,
            calcium: self.calcium + other.calcium,
            iron: self.iron + other.iron,
        }
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, multiplier: f64) -> Nutrients {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

/// Per-serving nutrient snapshot taken when a food was logged
///
/// Nutrient values are scoped to one reference serving of `serving_size`
/// `serving_unit`. Records that arrive without a serving size fall back to
/// the backend's reference size of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSnapshot {
    #[serde(flatten)]
    pub nutrients: Nutrients,
    #[serde(default = "default_serving_size")]
    pub serving_size: f64,
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
}

impl Default for NutrientSnapshot {
    fn default() -> Self {
        Self {
            nutrients: Nutrients::zero(),
            serving_size: default_serving_size(),
            serving_unit: default_serving_unit(),
        }
    }
}

fn default_serving_size() -> f64 {
    100.0
}

fn default_serving_unit() -> String {
    "g".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let n = Nutrients {
            calories: 200.0,
            protein: 10.0,
            sodium: 300.0,
            ..Nutrients::zero()
        };
        let scaled = n.scale(1.5);
        assert!((scaled.calories - 300.0).abs() < 1e-9);
        assert!((scaled.protein - 15.0).abs() < 1e-9);
        assert!((scaled.sodium - 450.0).abs() < 1e-9);

        let sum = scaled.add(&n);
        assert!((sum.calories - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_over_iterator() {
        let parts = vec![
            Nutrients {
                calories: 100.0,
                ..Nutrients::zero()
            },
            Nutrients {
                calories: 250.0,
                ..Nutrients::zero()
            },
        ];
        let total: Nutrients = parts.into_iter().sum();
        assert!((total.calories - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_sparse_snapshot_deserializes_to_zero() {
        let snapshot: NutrientSnapshot =
            serde_json::from_str(r#"{"calories": 52.0, "carbs": 14.0}"#).unwrap();
        assert!((snapshot.nutrients.calories - 52.0).abs() < 1e-9);
        assert_eq!(snapshot.nutrients.protein, 0.0);
        assert_eq!(snapshot.nutrients.vitamin_c, 0.0);
        assert!((snapshot.serving_size - 100.0).abs() < 1e-9);
        assert_eq!(snapshot.serving_unit, "g");
    }
}
