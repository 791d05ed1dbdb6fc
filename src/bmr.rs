//! Basal metabolic rate estimation
//!
//! Pluggable formula set keyed by algorithm identifier. Katch-McArdle and
//! Cunningham work from lean body mass and therefore need a body-fat
//! measurement; missing inputs fail loudly rather than falling back to a
//! different formula.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// BMR algorithm identifiers (backend strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmrAlgorithm {
    #[serde(rename = "Mifflin-St Jeor")]
    MifflinStJeor,
    #[serde(rename = "Revised Harris-Benedict")]
    RevisedHarrisBenedict,
    #[serde(rename = "Katch-McArdle")]
    KatchMcArdle,
    Cunningham,
    Oxford,
}

impl BmrAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmrAlgorithm::MifflinStJeor => "Mifflin-St Jeor",
            BmrAlgorithm::RevisedHarrisBenedict => "Revised Harris-Benedict",
            BmrAlgorithm::KatchMcArdle => "Katch-McArdle",
            BmrAlgorithm::Cunningham => "Cunningham",
            BmrAlgorithm::Oxford => "Oxford",
        }
    }

    /// Whether this formula needs a body-fat measurement
    pub fn requires_body_fat(&self) -> bool {
        matches!(self, BmrAlgorithm::KatchMcArdle | BmrAlgorithm::Cunningham)
    }
}

/// Gender as used by the gendered formula branches
///
/// Formulas that branch on gender use the female constants for anything
/// other than male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Calculate BMR in kcal/day
///
/// Inputs are canonical units: kg, cm, years. The weight-and-height
/// formulas require all of weight, height, and age to be positive; the lean
/// body mass formulas require weight and a body-fat percentage.
pub fn calculate(
    algorithm: BmrAlgorithm,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Gender,
    body_fat_percent: Option<f64>,
) -> Result<f64> {
    let missing = |field: &'static str| ValidationError::MissingBmrInput {
        algorithm: algorithm.as_str(),
        field,
    };

    if !(weight_kg > 0.0) {
        return Err(missing("weight"));
    }

    let male = matches!(gender, Gender::Male);

    if algorithm.requires_body_fat() {
        let body_fat = body_fat_percent.ok_or_else(|| missing("body fat percentage"))?;
        let lean_body_mass = weight_kg * (1.0 - body_fat / 100.0);
        return Ok(match algorithm {
            BmrAlgorithm::KatchMcArdle => 370.0 + 21.6 * lean_body_mass,
            BmrAlgorithm::Cunningham => 500.0 + 22.0 * lean_body_mass,
            _ => unreachable!(),
        });
    }

    if !(height_cm > 0.0) {
        return Err(missing("height"));
    }
    if !(age_years > 0.0) {
        return Err(missing("age"));
    }

    Ok(match algorithm {
        BmrAlgorithm::MifflinStJeor => {
            10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + if male { 5.0 } else { -161.0 }
        }
        BmrAlgorithm::RevisedHarrisBenedict => {
            if male {
                13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years + 88.362
            } else {
                9.247 * weight_kg + 3.098 * height_cm - 4.33 * age_years + 447.593
            }
        }
        // Simplified adult form of the Oxford equations
        BmrAlgorithm::Oxford => {
            if male {
                14.2 * weight_kg + 593.0
            } else {
                10.9 * weight_kg + 677.0
            }
        }
        BmrAlgorithm::KatchMcArdle | BmrAlgorithm::Cunningham => unreachable!(),
    })
}
