//! Needle mapping engine: one loaded artifact, many lookups.

use std::path::Path;

use crate::artifact::{grid_shape, ConfigArtifact, IntensityGrid};
use crate::error::Result;
use crate::needle::{map_grid, map_grid_observed, CharMatrix};
use crate::observer::MappingObserver;

/// Read-only handle over a loaded artifact. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct NeedleEngine {
    artifact: ConfigArtifact,
}

impl NeedleEngine {
    /// Load an artifact from disk. Missing or malformed files are an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ConfigArtifact::load(path)?;
        tracing::info!(
            path = %path.display(),
            font = %artifact.font_name,
            size = artifact.size,
            characters = artifact.char_map.len(),
            "artifact loaded"
        );
        Ok(Self { artifact })
    }

    pub fn from_artifact(artifact: ConfigArtifact) -> Self {
        Self { artifact }
    }

    pub fn artifact(&self) -> &ConfigArtifact {
        &self.artifact
    }

    pub fn font_name(&self) -> &str {
        &self.artifact.font_name
    }

    pub fn size(&self) -> u32 {
        self.artifact.size
    }

    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.artifact.char_map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.artifact.char_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifact.char_map.is_empty()
    }

    /// `None` when `ch` is not in the artifact.
    pub fn map_character(&self, ch: &str) -> Option<CharMatrix> {
        let gray = self.lookup(ch)?;
        Some(CharMatrix {
            matrix: map_grid(gray),
            shape: grid_shape(gray),
            gray_matrix: gray.clone(),
        })
    }

    /// Like [`map_character`](Self::map_character), reporting each cell to `observer`.
    pub fn map_character_observed(
        &self,
        ch: &str,
        observer: &dyn MappingObserver,
    ) -> Option<CharMatrix> {
        let gray = self.lookup(ch)?;
        Some(CharMatrix {
            matrix: map_grid_observed(gray, observer),
            shape: grid_shape(gray),
            gray_matrix: gray.clone(),
        })
    }

    fn lookup(&self, ch: &str) -> Option<&IntensityGrid> {
        let gray = self.artifact.get(ch);
        if gray.is_none() {
            tracing::debug!(ch, font = %self.artifact.font_name, "character not in artifact");
        }
        gray
    }
}
