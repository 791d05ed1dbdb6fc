//! Measurement units module
//!
//! Handles unit conversion between measurement systems.

pub mod axis;
pub mod convert;

pub use axis::{
    DistanceUnit, EnergyUnit, LengthUnit, VolumeUnit, WeightUnit, CM_PER_INCH, KCAL_TO_KJ,
    KG_TO_LB, KM_TO_MI, ML_PER_LITER, ML_PER_OZ,
};
pub use convert::{convert, LinearUnit};
