//! Curve-Based Gas Estimation Engine
//!
//! ## Overview
//!
//! Converts a raw gauge-pressure + temperature reading into the remaining
//! usable hydrogen in a metal-hydride cylinder, using the desorption curves
//! in [`crate::curves`]. The pipeline per reading:
//!
//! ```text
//! (psi gauge, °C)
//!    │ 1. psi → absolute MPa          (fixed conversion facts)
//!    │ 2. clamp temperature           (no extrapolation past calibration)
//!    │ 3. bracket temperature keys    (adjacent curve pair)
//!    │ 4. content within each curve   (pressure interpolation, saturating)
//!    │ 5. content across curves       (temperature interpolation)
//!    │ 6. derive volume / % / runtime / status
//!    ▼
//! Estimate { remaining_nl, remaining_percent, runtime_min, status }
//! ```
//!
//! ## Saturation, Not Rejection
//!
//! Readings outside the calibrated range are deliberately clamped rather
//! than rejected: a cylinder left in the sun past 40°C still deserves a
//! gauge reading, and a transducer glitch reporting -3 psi should read as
//! empty, not as an error dialog. The clamp happens once, upstream, and the
//! clamped value is reused for the interpolation position.
//!
//! ## Interpolation Notes
//!
//! Curves are tiny (nine points), so bracket search is a linear scan over
//! consecutive pairs. Binary search would not change observable behavior
//! and is not worth the code on a table this size.
//!
//! All math is f32; rounding of the output record goes through
//! `libm::roundf` so std and no_std builds produce identical bits.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

use crate::{
    constants::physics::{
        ATMOSPHERIC_PRESSURE_MPA, FULL_CHARGE_CONTENT_ML_G, ML_PER_NL, PSI_TO_MPA,
    },
    constants::thresholds::{STATUS_FULL_MIN_PCT, STATUS_LOW_MIN_PCT, STATUS_NORMAL_MIN_PCT},
    curves::{CurveStore, TemperatureCurve},
    cylinder::CylinderSpec,
};

/// Remaining-gas status band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GasStatus {
    /// At or above 80% of full charge
    Full,
    /// 40% to 80%
    Normal,
    /// 15% to 40% - plan a refill
    Low,
    /// Below 15% - supply pressure collapses quickly past the plateau
    Critical,
}

impl GasStatus {
    /// Classify a remaining percentage
    ///
    /// Band bounds are inclusive on the lower edge: exactly 80.0 is full,
    /// exactly 15.0 is low.
    pub fn from_percent(percent: f32) -> Self {
        if percent >= STATUS_FULL_MIN_PCT {
            Self::Full
        } else if percent >= STATUS_NORMAL_MIN_PCT {
            Self::Normal
        } else if percent >= STATUS_LOW_MIN_PCT {
            Self::Low
        } else {
            Self::Critical
        }
    }

    /// Wire spelling of the status, as consumed by presentation layers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }
}

/// Result of one estimation call
///
/// A plain value record derived from a single reading - nothing is retained
/// between calls. Volume and percentage are rounded to one decimal place,
/// runtime to the nearest whole minute; classification happens before
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Estimate {
    /// Remaining usable hydrogen (normal litres)
    #[cfg_attr(feature = "serde", serde(rename = "remainingNL"))]
    pub remaining_nl: f32,
    /// Remaining charge relative to practical full, clamped to [0, 100] (%)
    pub remaining_percent: f32,
    /// Estimated runtime at the cylinder's typical discharge rate (minutes)
    #[cfg_attr(feature = "serde", serde(rename = "estimatedRuntime"))]
    pub runtime_min: u32,
    /// Status band for the reading
    pub status: GasStatus,
}

/// Resolve hydrogen loading from absolute pressure on a single curve
///
/// Saturates at the curve endpoints - no extrapolation beyond the measured
/// range. Between endpoints, linear interpolation over the bracketing
/// adjacent pair.
///
/// The trailing zero return is a defensive fallback for data that slipped
/// past validation (e.g. a const-constructed store with unordered points);
/// it cannot be reached through a store built with [`CurveStore::new`].
pub fn content_at(pressure_mpa: f32, curve: &TemperatureCurve) -> f32 {
    let points = curve.points;
    let first = points[0];
    let last = points[points.len() - 1];

    if pressure_mpa <= first.pressure_mpa {
        return first.content_ml_g;
    }
    if pressure_mpa >= last.pressure_mpa {
        return last.content_ml_g;
    }

    for pair in points.windows(2) {
        let (below, above) = (pair[0], pair[1]);
        if pressure_mpa >= below.pressure_mpa && pressure_mpa <= above.pressure_mpa {
            let frac = (pressure_mpa - below.pressure_mpa)
                / (above.pressure_mpa - below.pressure_mpa);
            return below.content_ml_g + frac * (above.content_ml_g - below.content_ml_g);
        }
    }

    log_warn!("No bracketing pair for {} MPa - curve data violates ordering", pressure_mpa);
    0.0
}

/// Estimation engine over an immutable curve store
///
/// Pure per-call computation: no I/O, no history, no shared mutable state.
/// The engine is `Copy` and may be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct GasEstimator {
    store: CurveStore,
}

impl Default for GasEstimator {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl GasEstimator {
    /// Engine over the built-in reference desorption data
    pub const REFERENCE: Self = Self {
        store: CurveStore::REFERENCE,
    };

    /// Engine over a caller-validated store
    pub const fn new(store: CurveStore) -> Self {
        Self { store }
    }

    /// The curve store backing this engine
    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    /// Hydrogen loading for an absolute pressure and temperature
    ///
    /// Clamps the temperature into the calibrated key range, resolves the
    /// loading on the two bracketing curves by pressure, then interpolates
    /// between the two loadings by the clamped temperature's position. The
    /// clamp happens once and its result is reused for the interpolation
    /// position, which matters for out-of-range inputs.
    pub fn content_for(&self, pressure_mpa: f32, temperature_c: f32) -> f32 {
        let (temperature, clamped) = self.clamp_temperature(temperature_c);
        if clamped {
            log_warn!(
                "Temperature clamped to calibrated range ({} → {}°C)",
                temperature_c, temperature
            );
        }

        let curves = self.store.curves();
        let mut low = &curves[0];
        let mut high = &curves[0];
        for pair in curves.windows(2) {
            if temperature >= pair[0].temperature_c && temperature <= pair[1].temperature_c {
                low = &pair[0];
                high = &pair[1];
                break;
            }
        }

        let content_low = content_at(pressure_mpa, low);
        if low.temperature_c == high.temperature_c {
            return content_low;
        }
        let content_high = content_at(pressure_mpa, high);

        let frac = (temperature - low.temperature_c) / (high.temperature_c - low.temperature_c);
        content_low + frac * (content_high - content_low)
    }

    /// Estimate remaining gas from a raw gauge reading
    ///
    /// `pressure_psi` is gauge pressure as reported by the cylinder
    /// transducer; `temperature_c` the cylinder skin temperature. Neither
    /// needs caller-side range validation - out-of-range values saturate.
    pub fn estimate(
        &self,
        pressure_psi: f32,
        temperature_c: f32,
        spec: &CylinderSpec,
    ) -> Estimate {
        let pressure_mpa = pressure_psi * PSI_TO_MPA + ATMOSPHERIC_PRESSURE_MPA;
        let content = self.content_for(pressure_mpa, temperature_c);

        let percent = (content / FULL_CHARGE_CONTENT_ML_G * 100.0).clamp(0.0, 100.0);
        let volume_nl = percent / 100.0 * spec.max_capacity_nl;
        let runtime_min = volume_nl * ML_PER_NL / spec.discharge_rate_ml_min;

        // Classification uses the exact percentage; rounding below is
        // presentation-level only.
        let status = GasStatus::from_percent(percent);

        Estimate {
            remaining_nl: round_tenths(volume_nl),
            remaining_percent: round_tenths(percent),
            runtime_min: libm::roundf(runtime_min) as u32,
            status,
        }
    }

    /// Clamp temperature to the calibrated key range
    fn clamp_temperature(&self, temperature_c: f32) -> (f32, bool) {
        let min = self.store.min_temperature();
        let max = self.store.max_temperature();
        if temperature_c < min {
            (min, true)
        } else if temperature_c > max {
            (max, true)
        } else {
            (temperature_c, false)
        }
    }
}

/// Round to one decimal place, half away from zero
fn round_tenths(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}
