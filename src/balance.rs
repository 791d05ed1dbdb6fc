//! Net energy balance
//!
//! Combines intake, expenditure, and optional BMR into net calories and the
//! remaining daily budget. Derived per call, never persisted.

use crate::error::{Result, ValidationError};
use crate::models::GoalAdjustmentMode;

/// Computed energy balance for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    /// kcal; under dynamic mode this is intake minus expenditure
    pub net_calories: f64,
    /// kcal left in the daily budget (negative when over)
    pub calories_remaining: f64,
    /// Percent of goal reached, clamped below at 0; display may cap at 100
    pub progress_percent: f64,
}

/// Compute the day's energy balance
///
/// Under `Dynamic` mode, burned calories (plus BMR when `include_bmr` and a
/// BMR is known) widen the effective budget; under `Fixed` mode expenditure
/// is ignored. A non-positive or NaN goal is rejected rather than producing
/// an infinite progress figure.
pub fn compute(
    intake: f64,
    burned: f64,
    bmr: Option<f64>,
    include_bmr: bool,
    goal: f64,
    mode: GoalAdjustmentMode,
) -> Result<EnergyBalance> {
    if !(goal > 0.0) {
        return Err(ValidationError::InvalidGoal(goal));
    }

    let bmr_contribution = if include_bmr { bmr.unwrap_or(0.0) } else { 0.0 };
    let total_burned = burned + bmr_contribution;

    let (net_calories, calories_remaining) = match mode {
        GoalAdjustmentMode::Dynamic => {
            let net = intake.round() - total_burned;
            (net, goal - net)
        }
        GoalAdjustmentMode::Fixed => (intake.round(), goal - intake),
    };

    let progress_percent = (net_calories / goal * 100.0).max(0.0);

    tracing::debug!(
        net_calories,
        calories_remaining,
        progress_percent,
        mode = mode.as_str(),
        "computed energy balance"
    );

    Ok(EnergyBalance {
        net_calories,
        calories_remaining,
        progress_percent,
    })
}

/// Percent of a nutrient goal reached, rounded; 0 when no goal is set
pub fn nutrient_progress(actual: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        (actual / goal * 100.0).round()
    } else {
        0.0
    }
}
