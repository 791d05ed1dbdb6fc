//! Exercise entry models
//!
//! Diary exercise entries are either individual (one exercise with its sets)
//! or preset (a group of individual entries logged together from a workout
//! preset). The backend discriminates the two with a `type` field.

use serde::{Deserialize, Serialize};

/// Set type enum (backend strings)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetType {
    #[default]
    #[serde(rename = "Working Set")]
    WorkingSet,
    #[serde(rename = "Warm-up")]
    WarmUp,
    #[serde(rename = "Drop Set")]
    DropSet,
    Failure,
    #[serde(rename = "AMRAP")]
    Amrap,
    #[serde(rename = "Back-off")]
    BackOff,
    #[serde(rename = "Rest-Pause")]
    RestPause,
    Cluster,
    Technique,
}

impl SetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::WorkingSet => "Working Set",
            SetType::WarmUp => "Warm-up",
            SetType::DropSet => "Drop Set",
            SetType::Failure => "Failure",
            SetType::Amrap => "AMRAP",
            SetType::BackOff => "Back-off",
            SetType::RestPause => "Rest-Pause",
            SetType::Cluster => "Cluster",
            SetType::Technique => "Technique",
        }
    }
}

/// One set within an exercise entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSetRecord {
    /// 1-based and contiguous; renumbered upstream on reorder or delete
    pub set_number: u32,
    #[serde(default)]
    pub set_type: SetType,
    pub reps: Option<u32>,
    /// kilograms
    pub weight: Option<f64>,
    /// minutes
    pub duration: Option<f64>,
    /// seconds
    pub rest_time: Option<f64>,
    pub notes: Option<String>,
}

/// Exercise metadata captured at logging time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSnapshot {
    pub name: String,
    /// kcal per hour at the logged intensity
    pub calories_per_hour: Option<f64>,
}

/// A single logged exercise with its sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualExercise {
    pub exercise_snapshot: ExerciseSnapshot,
    /// kcal; precomputed upstream or derived from calories_per_hour
    #[serde(default)]
    pub calories_burned: f64,
    pub avg_heart_rate: Option<f64>,
    #[serde(default)]
    pub sets: Vec<ExerciseSetRecord>,
}

impl IndividualExercise {
    /// Total duration in minutes across this entry's sets
    pub fn total_duration_minutes(&self) -> f64 {
        self.sets.iter().filter_map(|s| s.duration).sum()
    }
}

/// Exercises logged together under one workout preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetExercise {
    #[serde(default)]
    pub preset_name: String,
    #[serde(default)]
    pub exercises: Vec<IndividualExercise>,
}

/// A diary exercise entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExerciseEntry {
    Individual(IndividualExercise),
    Preset(PresetExercise),
}
