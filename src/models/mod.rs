//! Data models
//!
//! Rust structs mirroring the backend's JSON records.

mod exercise;
mod food;
mod goals;
mod nutrient;

pub use exercise::{
    ExerciseEntry, ExerciseSetRecord, ExerciseSnapshot, IndividualExercise, PresetExercise,
    SetType,
};
pub use food::{FoodEntry, MealType};
pub use goals::{GoalAdjustmentMode, GoalSet};
pub use nutrient::{NutrientSnapshot, Nutrients};
