//! Configuration artifact: one font at one pixel size, with the intensity grid
//! of every character that rendered.
//!
//! Artifacts are written once as pretty JSON to `font_configs/{font_name}_{size}.json`
//! and loaded wholesale. Regenerating with the same font and size overwrites the file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use needle_constant::app::ARTIFACT_EXT;
use serde::{Deserialize, Serialize};

use crate::error::{NeedleError, Result};

/// Row-major grayscale coverage, 0 = empty, 255 = fully inked.
pub type IntensityGrid = Vec<Vec<u8>>;

/// Shape of a grid as `(height, width)`. An empty grid is `(0, 0)`.
pub fn grid_shape(grid: &IntensityGrid) -> (usize, usize) {
    (grid.len(), grid.first().map_or(0, Vec::len))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigArtifact {
    pub font_name: String,
    pub size: u32,
    /// Insertion order is kept so written files list characters in set order.
    pub char_map: IndexMap<String, IntensityGrid>,
}

impl ConfigArtifact {
    pub fn new(font_name: impl Into<String>, size: u32) -> Self {
        Self {
            font_name: font_name.into(),
            size,
            char_map: IndexMap::new(),
        }
    }

    pub fn with_glyph(mut self, ch: impl Into<String>, grid: IntensityGrid) -> Self {
        self.char_map.insert(ch.into(), grid);
        self
    }

    pub fn insert(&mut self, ch: char, grid: IntensityGrid) {
        self.char_map.insert(ch.to_string(), grid);
    }

    pub fn get(&self, ch: &str) -> Option<&IntensityGrid> {
        self.char_map.get(ch)
    }

    /// `{font_name}_{size}`, the artifact's identity.
    pub fn stem(&self) -> String {
        format!("{}_{}", self.font_name, self.size)
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem(), ARTIFACT_EXT)
    }

    /// Read, parse and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| NeedleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&raw).map_err(|source| NeedleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Every grid must be rectangular.
    pub fn validate(&self) -> Result<()> {
        for (ch, grid) in &self.char_map {
            let (_, expected) = grid_shape(grid);
            if let Some((row, cells)) = grid
                .iter()
                .enumerate()
                .find(|(_, cells)| cells.len() != expected)
            {
                return Err(NeedleError::RaggedGrid {
                    ch: ch.clone(),
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Write to `dir/{font_name}_{size}.json`, creating `dir` if needed. Returns the path.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}
