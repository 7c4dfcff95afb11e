//! Per-cell observation hook for the mapping pass.

use crate::needle::IntensityBand;

/// Receives every cell as it is mapped. Implementations must not affect the result.
pub trait MappingObserver {
    fn on_cell(&self, row: usize, col: usize, value: u8, band: IntensityBand);
}

impl<F> MappingObserver for F
where
    F: Fn(usize, usize, u8, IntensityBand),
{
    fn on_cell(&self, row: usize, col: usize, value: u8, band: IntensityBand) {
        self(row, col, value, band)
    }
}

/// Emits one `trace` event per cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl MappingObserver for TraceObserver {
    fn on_cell(&self, row: usize, col: usize, value: u8, band: IntensityBand) {
        tracing::trace!(row, col, gray = value, band = %band, "cell mapped");
    }
}
