//! Error types for glyph rendering and artifact building.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("font not readable at {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font parse error: {0}")]
    FontParse(String),

    #[error("font has no glyph for '{0}'")]
    MissingGlyph(char),

    #[error("pixel size must be positive, got {0}")]
    InvalidPixelSize(u32),

    #[error("artifact error: {0}")]
    Artifact(#[from] needle_core::NeedleError),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
