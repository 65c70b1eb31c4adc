//! Status Classification Thresholds
//!
//! Fixed bands on remaining-gas percentage. Each bound is inclusive on the
//! lower edge of its band: exactly 80.0% classifies as full, exactly 15.0%
//! as low.

/// Minimum remaining percentage classified as full (%).
///
/// At or above this level the cylinder is effectively topped up; the
/// plateau region makes finer resolution above 80% unreliable anyway.
pub const STATUS_FULL_MIN_PCT: f32 = 80.0;

/// Minimum remaining percentage classified as normal (%).
pub const STATUS_NORMAL_MIN_PCT: f32 = 40.0;

/// Minimum remaining percentage classified as low (%).
///
/// Below this band the reading falls off the plateau into the steep tail
/// of the desorption curve - supply pressure collapses quickly, so the
/// remaining band is critical.
pub const STATUS_LOW_MIN_PCT: f32 = 15.0;
