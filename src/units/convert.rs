//! Unit conversion functions
//!
//! Every supported unit is a linear map to its axis's canonical unit, so one
//! generic `convert` covers all axes. Same-unit conversion returns the input
//! unchanged so no-op conversions never accumulate floating-point drift.

use super::axis::{
    DistanceUnit, EnergyUnit, LengthUnit, VolumeUnit, WeightUnit, CM_PER_INCH, KCAL_TO_KJ,
    KG_TO_LB, KM_TO_MI, ML_PER_LITER, ML_PER_OZ,
};

/// A unit on one measurement axis, defined by its factor to the canonical unit
pub trait LinearUnit: Copy + PartialEq {
    /// Multiplier taking a value in this unit to the axis's canonical unit
    fn canonical_factor(self) -> f64;
}

impl LinearUnit for EnergyUnit {
    fn canonical_factor(self) -> f64 {
        match self {
            EnergyUnit::Kcal => 1.0,
            EnergyUnit::Kilojoule => 1.0 / KCAL_TO_KJ,
        }
    }
}

impl LinearUnit for WeightUnit {
    fn canonical_factor(self) -> f64 {
        match self {
            WeightUnit::Kg => 1.0,
            WeightUnit::Lbs => 1.0 / KG_TO_LB,
        }
    }
}

impl LinearUnit for DistanceUnit {
    fn canonical_factor(self) -> f64 {
        match self {
            DistanceUnit::Km => 1.0,
            DistanceUnit::Miles => 1.0 / KM_TO_MI,
        }
    }
}

impl LinearUnit for VolumeUnit {
    fn canonical_factor(self) -> f64 {
        match self {
            VolumeUnit::Ml => 1.0,
            VolumeUnit::Oz => ML_PER_OZ,
            VolumeUnit::Liter => ML_PER_LITER,
        }
    }
}

impl LinearUnit for LengthUnit {
    fn canonical_factor(self) -> f64 {
        match self {
            LengthUnit::Cm => 1.0,
            LengthUnit::Inches => CM_PER_INCH,
        }
    }
}

/// Convert a value between two units on the same axis
///
/// Pure linear map with no side effects. Negative input is passed through;
/// range checking is the caller's responsibility.
pub fn convert<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    value * from.canonical_factor() / to.canonical_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_identity_is_exact() {
        let v = 123.456789;
        assert_eq!(convert(v, EnergyUnit::Kcal, EnergyUnit::Kcal), v);
        assert_eq!(convert(v, WeightUnit::Lbs, WeightUnit::Lbs), v);
        assert_eq!(convert(v, VolumeUnit::Oz, VolumeUnit::Oz), v);
    }

    #[test]
    fn test_energy_conversion() {
        let kj = convert(500.0, EnergyUnit::Kcal, EnergyUnit::Kilojoule);
        assert!((kj - 2092.0).abs() < TOLERANCE);
        let kcal = convert(2092.0, EnergyUnit::Kilojoule, EnergyUnit::Kcal);
        assert!((kcal - 500.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_weight_conversion() {
        let lbs = convert(70.0, WeightUnit::Kg, WeightUnit::Lbs);
        assert!((lbs - 154.3234).abs() < 0.001);
    }

    #[test]
    fn test_distance_conversion() {
        let miles = convert(5.0, DistanceUnit::Km, DistanceUnit::Miles);
        assert!((miles - 3.106855).abs() < TOLERANCE);
    }

    #[test]
    fn test_volume_conversion() {
        let oz = convert(591.47, VolumeUnit::Ml, VolumeUnit::Oz);
        assert!((oz - 20.0).abs() < 0.001);
        let ml = convert(1.5, VolumeUnit::Liter, VolumeUnit::Ml);
        assert!((ml - 1500.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_length_conversion() {
        let inches = convert(175.0, LengthUnit::Cm, LengthUnit::Inches);
        assert!((inches - 68.8976).abs() < 0.001);
    }

    #[test]
    fn test_round_trips_within_tolerance() {
        for v in [0.0, 0.001, 1.0, 42.5, 1234.5678, -17.25] {
            let e = convert(
                convert(v, EnergyUnit::Kcal, EnergyUnit::Kilojoule),
                EnergyUnit::Kilojoule,
                EnergyUnit::Kcal,
            );
            assert!((e - v).abs() < TOLERANCE);

            let w = convert(
                convert(v, WeightUnit::Kg, WeightUnit::Lbs),
                WeightUnit::Lbs,
                WeightUnit::Kg,
            );
            assert!((w - v).abs() < TOLERANCE);

            let d = convert(
                convert(v, DistanceUnit::Km, DistanceUnit::Miles),
                DistanceUnit::Miles,
                DistanceUnit::Km,
            );
            assert!((d - v).abs() < TOLERANCE);

            let vol = convert(
                convert(v, VolumeUnit::Ml, VolumeUnit::Oz),
                VolumeUnit::Oz,
                VolumeUnit::Ml,
            );
            assert!((vol - v).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_negative_input_passes_through() {
        let kj = convert(-100.0, EnergyUnit::Kcal, EnergyUnit::Kilojoule);
        assert!((kj + 418.4).abs() < TOLERANCE);
    }
}
