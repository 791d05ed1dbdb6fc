//! Unit types and conversion constants
//!
//! One enum per measurement axis. Values are always stored in the axis's
//! canonical unit (kcal, kg, km, ml, cm); the other units exist for display
//! and for interpreting backend records flagged with a `unit` field.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilojoules per kilocalorie
pub const KCAL_TO_KJ: f64 = 4.184;
/// Pounds per kilogram
pub const KG_TO_LB: f64 = 2.20462;
/// Miles per kilometer
pub const KM_TO_MI: f64 = 0.621371;
/// Milliliters per fluid ounce
pub const ML_PER_OZ: f64 = 29.5735;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Energy units (canonical: kcal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "kJ")]
    Kilojoule,
}

impl EnergyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kilojoule => "kJ",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kcal" => Some(EnergyUnit::Kcal),
            "kj" => Some(EnergyUnit::Kilojoule),
            _ => None,
        }
    }
}

/// Body-weight units (canonical: kg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "lbs")]
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}

/// Distance units (canonical: km)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "miles")]
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "miles",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" => Some(DistanceUnit::Km),
            "mi" | "mile" | "miles" => Some(DistanceUnit::Miles),
            _ => None,
        }
    }
}

/// Fluid volume units (canonical: ml)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "oz")]
    Oz,
    #[serde(rename = "liter")]
    Liter,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::Oz => "oz",
            VolumeUnit::Liter => "liter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" => Some(VolumeUnit::Ml),
            "oz" | "fl oz" | "floz" => Some(VolumeUnit::Oz),
            "l" | "liter" | "liters" => Some(VolumeUnit::Liter),
            _ => None,
        }
    }
}

/// Body-measurement length units (canonical: cm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "inches")]
    Inches,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::Inches => "inches",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Some(LengthUnit::Cm),
            "in" | "inch" | "inches" => Some(LengthUnit::Inches),
            _ => None,
        }
    }
}
