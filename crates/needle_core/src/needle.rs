//! Intensity → needle angle mapping.

use needle_constant::intensity::{
    HIGH_ANGLES, HIGH_THRESHOLD, LOW_ANGLES, MEDIUM_ANGLES, MEDIUM_THRESHOLD,
};
use serde::{Deserialize, Serialize};

use crate::artifact::IntensityGrid;
use crate::observer::MappingObserver;

/// Coarse quantization of glyph coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    /// Fully inked
    High,
    /// Partially inked
    Medium,
    /// Empty or edge
    Low,
}

impl IntensityBand {
    pub const ALL: [IntensityBand; 3] = [Self::High, Self::Medium, Self::Low];

    /// Evaluated high-to-low; both comparisons are strict.
    pub fn classify(value: u8) -> Self {
        if value > HIGH_THRESHOLD {
            Self::High
        } else if value > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn angles(self) -> NeedleAngles {
        match self {
            Self::High => HIGH_ANGLES.into(),
            Self::Medium => MEDIUM_ANGLES.into(),
            Self::Low => LOW_ANGLES.into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for IntensityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Angles of the two needles in one cell, in radians. Serializes as `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeedleAngles(pub f64, pub f64);

impl From<(f64, f64)> for NeedleAngles {
    fn from((a, b): (f64, f64)) -> Self {
        Self(a, b)
    }
}

pub type NeedleGrid = Vec<Vec<NeedleAngles>>;

pub fn needle_angles(value: u8) -> NeedleAngles {
    IntensityBand::classify(value).angles()
}

/// Map every cell independently. The result has the same shape as `grid`.
pub fn map_grid(grid: &IntensityGrid) -> NeedleGrid {
    grid.iter()
        .map(|row| row.iter().copied().map(needle_angles).collect())
        .collect()
}

/// Like [`map_grid`], reporting every cell to `observer` in row-major order.
pub fn map_grid_observed(grid: &IntensityGrid, observer: &dyn MappingObserver) -> NeedleGrid {
    grid.iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    let band = IntensityBand::classify(value);
                    observer.on_cell(row, col, value, band);
                    band.angles()
                })
                .collect()
        })
        .collect()
}

/// Needle matrix for one character, with the gray grid it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharMatrix {
    pub matrix: NeedleGrid,
    /// `(height, width)`
    pub shape: (usize, usize),
    pub gray_matrix: IntensityGrid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(IntensityBand::classify(255), IntensityBand::High);
        assert_eq!(IntensityBand::classify(201), IntensityBand::High);
        assert_eq!(IntensityBand::classify(200), IntensityBand::Medium);
        assert_eq!(IntensityBand::classify(101), IntensityBand::Medium);
        assert_eq!(IntensityBand::classify(100), IntensityBand::Low);
        assert_eq!(IntensityBand::classify(0), IntensityBand::Low);
    }

    #[test]
    fn test_angles_per_band() {
        assert_eq!(IntensityBand::High.angles(), NeedleAngles(FRAC_PI_2, 0.0));
        assert_eq!(
            IntensityBand::Medium.angles(),
            NeedleAngles(FRAC_PI_4, 3.0 * FRAC_PI_4)
        );
        assert_eq!(IntensityBand::Low.angles(), NeedleAngles(0.0, FRAC_PI_2));
    }

    #[test]
    fn test_every_value_maps_to_a_band_pair() {
        let pairs: Vec<NeedleAngles> = IntensityBand::ALL.iter().map(|b| b.angles()).collect();
        for v in 0..=u8::MAX {
            let angles = needle_angles(v);
            assert!(pairs.contains(&angles), "value {v} produced {angles:?}");
        }
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(needle_angles(200), NeedleAngles(FRAC_PI_4, 3.0 * FRAC_PI_4));
        assert_eq!(needle_angles(100), NeedleAngles(0.0, FRAC_PI_2));
    }

    #[test]
    fn test_map_grid_two_by_two() {
        let grid = vec![vec![255, 150], vec![90, 0]];
        let mapped = map_grid(&grid);
        assert_eq!(
            mapped,
            vec![
                vec![NeedleAngles(FRAC_PI_2, 0.0), NeedleAngles(FRAC_PI_4, 3.0 * FRAC_PI_4)],
                vec![NeedleAngles(0.0, FRAC_PI_2), NeedleAngles(0.0, FRAC_PI_2)],
            ]
        );
    }

    #[test]
    fn test_map_grid_keeps_shape_and_is_cellwise() {
        let grid: IntensityGrid = (0..7u8)
            .map(|r| (0..5u8).map(|c| r.wrapping_mul(37).wrapping_add(c * 53)).collect())
            .collect();
        let mapped = map_grid(&grid);
        assert_eq!(mapped.len(), 7);
        for (r, row) in mapped.iter().enumerate() {
            assert_eq!(row.len(), 5);
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(*cell, needle_angles(grid[r][c]));
            }
        }
    }

    #[test]
    fn test_map_empty_grid() {
        assert!(map_grid(&Vec::new()).is_empty());
    }

    #[test]
    fn test_observer_sees_every_cell_in_order() {
        let seen = RefCell::new(Vec::new());
        let observer = |row: usize, col: usize, value: u8, band: IntensityBand| {
            seen.borrow_mut().push((row, col, value, band));
        };
        let grid = vec![vec![255, 150], vec![90, 0]];

        let observed = map_grid_observed(&grid, &observer);
        assert_eq!(observed, map_grid(&grid));
        assert_eq!(
            seen.into_inner(),
            vec![
                (0, 0, 255, IntensityBand::High),
                (0, 1, 150, IntensityBand::Medium),
                (1, 0, 90, IntensityBand::Low),
                (1, 1, 0, IntensityBand::Low),
            ]
        );
    }

    #[test]
    fn test_char_matrix_serializes_as_arrays() {
        let matrix = CharMatrix {
            matrix: vec![vec![NeedleAngles(0.0, 1.5)]],
            shape: (1, 1),
            gray_matrix: vec![vec![42]],
        };
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "matrix": [[[0.0, 1.5]]],
                "shape": [1, 1],
                "gray_matrix": [[42]]
            })
        );
    }
}
