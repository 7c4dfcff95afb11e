//! `needle render`

use std::path::Path;

use anyhow::{Context, Result};
use needle_core::grid_shape;
use needle_glyph::{GlyphRasterizer, TtfRasterizer};

use crate::output;

pub fn handle(font: &Path, size: u32, face_index: u32, ch: char) -> Result<()> {
    let rasterizer = TtfRasterizer::open_face(font, face_index)
        .with_context(|| format!("opening font {}", font.display()))?;
    let grid = rasterizer
        .render(ch, size)
        .with_context(|| format!("rendering '{ch}' at {size}px"))?;
    let (rows, cols) = grid_shape(&grid);

    output::data(
        "glyph",
        &serde_json::json!({
            "char": ch.to_string(),
            "font_name": rasterizer.family_name(),
            "size": size,
            "shape": [rows, cols],
            "gray_matrix": grid,
        }),
    );
    output::header(&format!("Matrix for '{ch}' ({} {size}px)", rasterizer.family_name()));
    output::kv("shape", &format!("{rows}x{cols}"));
    output::gray_grid(&grid);
    Ok(())
}
