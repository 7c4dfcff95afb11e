//! `needle build`

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use needle_glyph::{TtfRasterizer, build_config};
use needle_observability::{artifact_span, record_duration};

use crate::output;

pub fn handle(font: &Path, size: u32, face_index: u32, out_dir: &Path) -> Result<()> {
    let span = artifact_span!("build", font.display());
    let _guard = span.enter();
    let started = Instant::now();

    let rasterizer = TtfRasterizer::open_face(font, face_index)
        .with_context(|| format!("opening font {}", font.display()))?;

    let bar = output::progress(needle_constant::charset::len());
    let report = build_config(&rasterizer, size, out_dir, |p| {
        bar.set_position(p.index as u64);
        bar.set_message(format!("'{}'", p.ch));
    });
    bar.finish_and_clear();
    let report = report?;
    record_duration("duration_ms", started.elapsed());

    output::data(
        "build",
        &serde_json::json!({
            "path": report.path,
            "font_name": report.font_name,
            "size": report.size,
            "rendered": report.rendered,
            "skipped": report.skipped.iter().map(|s| s.ch.to_string()).collect::<Vec<_>>(),
        }),
    );

    for skipped in &report.skipped {
        output::warning(&format!("Skipped '{}': {}", skipped.ch, skipped.reason));
    }
    output::success(&format!(
        "Character set configuration has been saved to: {}",
        report.path.display()
    ));
    output::kv("font", &report.font_name);
    output::kv("size", &report.size.to_string());
    output::kv("glyphs", &report.rendered.to_string());
    Ok(())
}
