//! Daily exercise aggregation
//!
//! Reduces diary exercise entries (individual or preset-grouped) into total
//! sets, duration, calories, and average heart rate. Calories logged under
//! the literal "Active Calories" exercise and step-derived calories are
//! mutually exclusive: summing both would double-count ambulatory activity
//! captured by a tracker as exercise and again as a passive step count.

use crate::models::{ExerciseEntry, IndividualExercise};

/// Exercise name the backend uses for tracker-reported active energy
pub const ACTIVE_CALORIES_NAME: &str = "Active Calories";

/// Rough kcal per step for an average person
const KCAL_PER_STEP: f64 = 0.04;
/// Reference body weight for the weight-adjusted step estimate
const REFERENCE_WEIGHT_KG: f64 = 70.0;

/// Summed totals for a day's exercise entries
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExerciseTotals {
    pub total_sets: u32,
    pub total_duration_minutes: f64,
    /// kcal, including the active-or-steps contribution
    pub total_calories_burned: f64,
    /// Mean over entries that carry a heart rate; 0 when none do
    pub average_heart_rate: f64,
    /// The contribution chosen from active calories or step calories
    pub active_or_steps_calories: f64,
}

/// Sum exercise entries into daily totals
///
/// `steps_calories` is the step-derived figure (see [`steps_to_calories`]);
/// it only enters the total when no "Active Calories" entry carries a
/// positive value. Entries without sets still contribute their own
/// `calories_burned`.
pub fn aggregate(entries: &[ExerciseEntry], steps_calories: f64) -> ExerciseTotals {
    let mut active_calories = 0.0;
    let mut other_calories = 0.0;
    let mut total_sets = 0u32;
    let mut total_duration = 0.0;
    let mut heart_rate_sum = 0.0;
    let mut heart_rate_count = 0u32;

    let mut tally = |ex: &IndividualExercise| {
        if ex.exercise_snapshot.name == ACTIVE_CALORIES_NAME {
            active_calories += ex.calories_burned;
        } else {
            other_calories += ex.calories_burned;
        }
        total_sets += ex.sets.len() as u32;
        total_duration += ex.total_duration_minutes();
        if let Some(hr) = ex.avg_heart_rate {
            heart_rate_sum += hr;
            heart_rate_count += 1;
        }
    };

    for entry in entries {
        match entry {
            ExerciseEntry::Individual(ex) => tally(ex),
            ExerciseEntry::Preset(preset) => preset.exercises.iter().for_each(&mut tally),
        }
    }

    // Active calories win whenever any were logged, even if smaller than the
    // step-derived figure; the two are never summed.
    let active_or_steps = if active_calories > 0.0 {
        tracing::debug!(
            active_calories,
            "including active calories from exercise entries"
        );
        active_calories.round()
    } else {
        tracing::debug!(steps_calories, "no active calories logged, including step calories");
        steps_calories.round()
    };

    let average_heart_rate = if heart_rate_count > 0 {
        heart_rate_sum / f64::from(heart_rate_count)
    } else {
        0.0
    };

    ExerciseTotals {
        total_sets,
        total_duration_minutes: total_duration,
        total_calories_burned: other_calories.round() + active_or_steps,
        average_heart_rate,
        active_or_steps_calories: active_or_steps,
    }
}

/// Convert a daily step count to kcal (roughly 0.04 kcal per step)
pub fn steps_to_calories(steps: u32) -> f64 {
    (f64::from(steps) * KCAL_PER_STEP).round()
}

/// Step-to-kcal conversion adjusted for body weight
pub fn steps_to_calories_for_weight(steps: u32, weight_kg: f64) -> f64 {
    (f64::from(steps) * KCAL_PER_STEP * (weight_kg / REFERENCE_WEIGHT_KG)).round()
}

/// Derive calories burned from an exercise's hourly rate and a duration
pub fn calories_for_duration(calories_per_hour: f64, duration_minutes: f64) -> f64 {
    ((calories_per_hour / 60.0) * duration_minutes).round()
}

/// Walking pace for step estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkingIntensity {
    Light,
    Moderate,
    Brisk,
}

impl WalkingIntensity {
    /// Steps per minute at this pace
    pub fn steps_per_minute(&self) -> f64 {
        match self {
            WalkingIntensity::Light => 80.0,
            WalkingIntensity::Moderate => 100.0,
            WalkingIntensity::Brisk => 120.0,
        }
    }
}

/// Estimate steps taken during a walking exercise of the given duration
pub fn estimate_steps_from_walking(duration_minutes: f64, intensity: WalkingIntensity) -> f64 {
    (duration_minutes * intensity.steps_per_minute()).round()
}
