//! Aggregation module
//!
//! Reduces per-item diary records into daily and per-meal totals.

pub mod exercise;
pub mod nutrition;

pub use exercise::{
    aggregate as aggregate_exercise, calories_for_duration, estimate_steps_from_walking,
    steps_to_calories, steps_to_calories_for_weight, ExerciseTotals, WalkingIntensity,
    ACTIVE_CALORIES_NAME,
};
pub use nutrition::{aggregate as aggregate_nutrition, aggregate_by_meal, IntakeTotals};
