//! Intensity band thresholds and the needle angle pair for each band.
//!
//! Bands are evaluated high-to-low with strict `>` comparisons, so a value of
//! exactly `HIGH_THRESHOLD` is medium and exactly `MEDIUM_THRESHOLD` is low.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Values strictly above this are fully inked.
pub const HIGH_THRESHOLD: u8 = 200;
/// Values strictly above this (and not high) are partially inked.
pub const MEDIUM_THRESHOLD: u8 = 100;

/// Needles for a fully inked cell: (π/2, 0)
pub const HIGH_ANGLES: (f64, f64) = (FRAC_PI_2, 0.0);
/// Needles for a partially inked cell: (π/4, 3π/4)
pub const MEDIUM_ANGLES: (f64, f64) = (FRAC_PI_4, 3.0 * FRAC_PI_4);
/// Needles for an empty or edge cell: (0, π/2)
pub const LOW_ANGLES: (f64, f64) = (0.0, FRAC_PI_2);
