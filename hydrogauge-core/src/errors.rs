//! Error Types for Curve Store Validation
//!
//! ## Design Philosophy
//!
//! Hydrogauge's error system follows a few hard rules, since the engine is
//! expected to run on fuel-cell controller boards with very little RAM:
//!
//! 1. **Small Size**: Every variant keeps its data inline (f32/usize only),
//!    no String, no heap. The whole enum stays within a couple of words.
//!
//! 2. **Copy Semantics**: Errors implement Copy so they can be returned and
//!    stored without move-semantics friction.
//!
//! 3. **Fail Fast, Then Never**: All errors here are *configuration* errors
//!    raised while constructing or querying a [`crate::CurveStore`]. Once a
//!    store has been validated, estimation itself is infallible - readings
//!    outside the calibrated range are clamped, not rejected.
//!
//! ## Error Categories
//!
//! ### Reference-data shape
//! - `InsufficientCurves`: bracketing needs at least two temperature keys
//! - `InsufficientPoints`: pressure interpolation needs at least two points
//!
//! ### Reference-data quality
//! - `NonMonotonicPressure`: adjacent pressures must strictly increase;
//!   a duplicate pressure would divide by zero during interpolation
//! - `UnsortedTemperatures`: bracket search assumes ascending keys
//!
//! ### Queries
//! - `UnknownTemperature`: exact-key lookup miss - a defined error instead
//!   of a silent fallback curve

use thiserror_no_std::Error;

/// Result type for curve store operations
pub type CurveResult<T> = Result<T, CurveError>;

/// Curve store errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// Fewer reference temperatures than bracketing interpolation requires
    #[error("Store has {count} curves, need at least {required}")]
    InsufficientCurves {
        /// Number of temperature curves supplied
        count: usize,
        /// Minimum curves required for temperature bracketing
        required: usize,
    },

    /// A curve has too few points for pressure interpolation
    #[error("Curve at {temperature_c}°C has {count} points, need at least {required}")]
    InsufficientPoints {
        /// Reference temperature of the offending curve
        temperature_c: f32,
        /// Number of points in the curve
        count: usize,
        /// Minimum points required for pressure interpolation
        required: usize,
    },

    /// Adjacent pressures within a curve are equal or decreasing
    #[error("Curve at {temperature_c}°C: pressure not strictly increasing at point {index}")]
    NonMonotonicPressure {
        /// Reference temperature of the offending curve
        temperature_c: f32,
        /// Index of the first point of the offending pair
        index: usize,
    },

    /// Reference temperatures are not strictly ascending
    #[error("Curve set not sorted by temperature at index {index}")]
    UnsortedTemperatures {
        /// Index of the first curve of the offending pair
        index: usize,
    },

    /// Exact-key lookup for a temperature the store does not hold
    #[error("No reference curve at {temperature_c}°C")]
    UnknownTemperature {
        /// The requested temperature key
        temperature_c: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CurveError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientCurves { count, required } =>
                defmt::write!(fmt, "{} curves, need {}", count, required),
            Self::InsufficientPoints { temperature_c, count, required } =>
                defmt::write!(fmt, "Curve {}°C: {} points, need {}", temperature_c, count, required),
            Self::NonMonotonicPressure { temperature_c, index } =>
                defmt::write!(fmt, "Curve {}°C: pressure order broken at {}", temperature_c, index),
            Self::UnsortedTemperatures { index } =>
                defmt::write!(fmt, "Curves unsorted at {}", index),
            Self::UnknownTemperature { temperature_c } =>
                defmt::write!(fmt, "No curve at {}°C", temperature_c),
        }
    }
}
