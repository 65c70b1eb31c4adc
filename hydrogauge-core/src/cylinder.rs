//! Cylinder Specification
//!
//! Static description of the physical cylinder being gauged. Only capacity
//! and typical discharge rate feed the computation; the remaining fields are
//! informational metadata for a presentation layer to pass through.

/// Static specification of a metal-hydride storage cylinder
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CylinderSpec {
    /// Model designation
    pub model: &'static str,
    /// Usable hydrogen capacity at full charge (normal litres)
    pub max_capacity_nl: f32,
    /// Typical discharge rate of the attached load (mL/min)
    pub discharge_rate_ml_min: f32,
    /// Storage alloy family
    pub alloy: &'static str,
    /// Outer diameter (mm)
    pub diameter_mm: f32,
    /// Overall length (mm)
    pub length_mm: f32,
    /// Filled weight (kg)
    pub weight_kg: f32,
    /// Rated fill pressure range, gauge (psi)
    pub pressure_range_psi: (f32, f32),
    /// Rated operating temperature range (°C)
    pub temperature_range_c: (f32, f32),
}

impl CylinderSpec {
    /// Reference 450 NL canister the built-in curves were measured for
    pub const MH_450: Self = Self {
        model: "MH-450",
        max_capacity_nl: 450.0,
        discharge_rate_ml_min: 500.0,
        alloy: "LaNi5",
        diameter_mm: 76.0,
        length_mm: 272.0,
        weight_kg: 3.9,
        pressure_range_psi: (0.0, 1500.0),
        temperature_range_c: (0.0, 40.0),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cylinder_metadata() {
        let spec = CylinderSpec::MH_450;
        assert_eq!(spec.model, "MH-450");
        assert_eq!(spec.max_capacity_nl, 450.0);
        assert_eq!(spec.discharge_rate_ml_min, 500.0);
    }
}
