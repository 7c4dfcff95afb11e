//! Shared constants for needle-matrix.

pub mod app;
pub mod charset;
pub mod intensity;
