//! Constants for Hydrogauge Core
//!
//! Centralized, documented constants used throughout the estimation engine.
//! All numeric values live here with their purpose, source, and units spelled
//! out - use these instead of magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: unit conversion facts and the full-charge loading reference
//! - **Thresholds**: status classification bands on remaining percentage

/// Unit conversion facts and hydride loading references.
pub mod physics;

/// Status classification bands for remaining-gas percentage.
pub mod thresholds;

// Re-export commonly used constants for convenience
pub use physics::{
    PSI_TO_MPA, ATMOSPHERIC_PRESSURE_MPA,
    FULL_CHARGE_CONTENT_ML_G, ML_PER_NL,
};

pub use thresholds::{
    STATUS_FULL_MIN_PCT, STATUS_NORMAL_MIN_PCT, STATUS_LOW_MIN_PCT,
};
