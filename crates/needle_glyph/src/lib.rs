//! Glyph matrix builder: renders the fixed character set of a font into a
//! configuration artifact.
//!
//! ```rust,no_run
//! use needle_glyph::{build_config, TtfRasterizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rasterizer = TtfRasterizer::open("font/Phosphate.ttc")?;
//!     let report = build_config(&rasterizer, 12, "font_configs", |_| {})?;
//!     println!("wrote {}", report.path.display());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod rasterizer;

pub use builder::{
    build_artifact, build_config, build_font_config, render_glyph, BuildProgress, BuildReport,
    SkippedGlyph,
};
pub use error::{GlyphError, Result};
pub use rasterizer::{GlyphRasterizer, TtfRasterizer, UNKNOWN_FAMILY};
