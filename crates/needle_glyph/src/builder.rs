//! Batch building of configuration artifacts over the fixed character set.

use std::path::{Path, PathBuf};

use needle_constant::{app::ARTIFACT_DIR, charset};
use needle_core::{ConfigArtifact, IntensityGrid};

use crate::error::Result;
use crate::rasterizer::{GlyphRasterizer, TtfRasterizer};

/// A character that failed to render and was left out of the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGlyph {
    pub ch: char,
    pub reason: String,
}

/// Outcome of one build run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub path: PathBuf,
    pub font_name: String,
    pub size: u32,
    pub rendered: usize,
    pub skipped: Vec<SkippedGlyph>,
}

/// Progress of a build, reported once per character before it is rendered.
#[derive(Debug, Clone, Copy)]
pub struct BuildProgress {
    /// Zero-based position in the character set
    pub index: usize,
    pub total: usize,
    pub ch: char,
}

/// Render every character of the set. Failures are logged and skipped.
pub fn build_artifact<R>(
    rasterizer: &R,
    pixel_size: u32,
    mut on_progress: impl FnMut(BuildProgress),
) -> (ConfigArtifact, Vec<SkippedGlyph>)
where
    R: GlyphRasterizer + ?Sized,
{
    let total = charset::len();
    let mut artifact = ConfigArtifact::new(rasterizer.family_name(), pixel_size);
    let mut skipped = Vec::new();

    for (index, ch) in charset::chars().enumerate() {
        on_progress(BuildProgress { index, total, ch });
        match rasterizer.render(ch, pixel_size) {
            Ok(grid) => artifact.insert(ch, grid),
            Err(e) => {
                tracing::warn!(ch = %ch, error = %e, "glyph skipped");
                skipped.push(SkippedGlyph {
                    ch,
                    reason: e.to_string(),
                });
            }
        }
    }

    (artifact, skipped)
}

/// Build and write `out_dir/{font_name}_{pixel_size}.json`, overwriting any previous run.
pub fn build_config<R>(
    rasterizer: &R,
    pixel_size: u32,
    out_dir: impl AsRef<Path>,
    on_progress: impl FnMut(BuildProgress),
) -> Result<BuildReport>
where
    R: GlyphRasterizer + ?Sized,
{
    let (artifact, skipped) = build_artifact(rasterizer, pixel_size, on_progress);
    let path = artifact.write_to_dir(out_dir)?;
    tracing::info!(
        path = %path.display(),
        font = %artifact.font_name,
        size = pixel_size,
        rendered = artifact.char_map.len(),
        skipped = skipped.len(),
        "artifact written"
    );
    Ok(BuildReport {
        path,
        font_name: artifact.font_name,
        size: pixel_size,
        rendered: artifact.char_map.len(),
        skipped,
    })
}

/// Render a single character straight from a font file.
pub fn render_glyph(font_path: impl AsRef<Path>, ch: char, pixel_size: u32) -> Result<IntensityGrid> {
    TtfRasterizer::open(font_path)?.render(ch, pixel_size)
}

/// Build the artifact for a font file into `font_configs/` and return its path.
pub fn build_font_config(font_path: impl AsRef<Path>, pixel_size: u32) -> Result<PathBuf> {
    let rasterizer = TtfRasterizer::open(font_path)?;
    Ok(build_config(&rasterizer, pixel_size, ARTIFACT_DIR, |_| {})?.path)
}
