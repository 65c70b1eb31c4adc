//! Physical Constants for Hydrogauge
//!
//! Unit conversion facts and hydride loading references used by the
//! estimation engine. These values are fixed physics, not tunables -
//! changing them breaks output compatibility with the reference curves.

// ===== PRESSURE UNIT CONVERSION =====

/// Pounds-per-square-inch to megapascal conversion factor (MPa/psi).
///
/// Cylinder transducers report gauge pressure in psi; the reference
/// desorption curves are tabulated in absolute MPa.
///
/// Source: NIST SP 811, exact value 6.894757 kPa/psi
pub const PSI_TO_MPA: f32 = 0.00689476;

/// Standard atmospheric pressure (MPa).
///
/// Added to converted gauge pressure to obtain absolute pressure, the
/// quantity the P-C-T curves are expressed in. 0.1 MPa is the rounded
/// reference value used when the curves were tabulated.
///
/// Source: ISO 2533 standard atmosphere (101.325 kPa)
pub const ATMOSPHERIC_PRESSURE_MPA: f32 = 0.1;

// ===== HYDRIDE LOADING REFERENCE =====

/// Practical full-charge hydrogen loading (mL H₂ per gram of alloy).
///
/// The plateau loading of the reference AB₅ alloy. Deliberately below the
/// absolute curve maximum (172 mL/g at the steep high-pressure tail) so
/// that 100% represents a repeatable full charge rather than a value only
/// reachable by overpressure.
///
/// Source: manufacturer P-C-T desorption data for the reference alloy
pub const FULL_CHARGE_CONTENT_ML_G: f32 = 170.0;

/// Millilitres per normal litre (mL/NL).
///
/// Bridges cylinder capacity (normal litres) to discharge rate (mL/min)
/// in the runtime estimate. A unit conversion, not an approximation.
pub const ML_PER_NL: f32 = 1000.0;
