//! Core estimation engine for Hydrogauge
//!
//! Estimates remaining usable hydrogen in a metal-hydride storage cylinder
//! from a gauge pressure + temperature reading, using manufacturer P-C-T
//! desorption curves.
//!
//! Key constraints:
//! - Pure computation library: no I/O, no persisted state, no UI
//! - no_std capable for fuel-cell controller boards
//! - Out-of-range readings saturate, they never error
//!
//! ```no_run
//! use hydrogauge_core::{CylinderSpec, GasEstimator, GasStatus};
//!
//! let engine = GasEstimator::REFERENCE;
//!
//! // 312 psi gauge at 23°C cylinder skin temperature
//! let estimate = engine.estimate(312.0, 23.0, &CylinderSpec::MH_450);
//!
//! if estimate.status == GasStatus::Critical {
//!     // schedule a swap
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod curves;
pub mod cylinder;
pub mod errors;
pub mod estimator;

// Public API
pub use curves::{CurvePoint, CurveStore, TemperatureCurve};
pub use cylinder::CylinderSpec;
pub use errors::{CurveError, CurveResult};
pub use estimator::{content_at, Estimate, GasEstimator, GasStatus};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
