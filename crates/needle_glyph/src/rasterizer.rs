//! Font rasterizers.

use std::path::Path;

use fontdue::{Font, FontSettings};
use needle_core::IntensityGrid;
use ttf_parser::{name_id, Face, PlatformId};

use crate::error::{GlyphError, Result};

/// Family name used when a font carries none we can decode.
pub const UNKNOWN_FAMILY: &str = "Unknown";

/// Renders single characters of one font into intensity grids.
pub trait GlyphRasterizer {
    /// Family name recorded as the artifact's `font_name`.
    fn family_name(&self) -> &str;

    /// Render `ch` at `pixel_size` pixels per em. The grid is sized to the glyph's
    /// bitmap; a glyph with no outline renders as an empty grid.
    fn render(&self, ch: char, pixel_size: u32) -> Result<IntensityGrid>;
}

/// TrueType / OpenType rasterizer, including faces inside `.ttc` collections.
///
/// Coverage bitmaps come from `fontdue`; the family name is read from the
/// `name` table with `ttf-parser`.
pub struct TtfRasterizer {
    font: Font,
    family_name: String,
}

impl TtfRasterizer {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_face(path, 0)
    }

    pub fn open_face(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| GlyphError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, face_index)
    }

    pub fn from_bytes(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let face = Face::parse(&data, face_index)
            .map_err(|e| GlyphError::FontParse(e.to_string()))?;
        let family_name = read_family_name(&face).unwrap_or_else(|| UNKNOWN_FAMILY.to_string());

        let settings = FontSettings {
            collection_index: face_index,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data.as_slice(), settings)
            .map_err(|e| GlyphError::FontParse(e.to_string()))?;
        tracing::debug!(family = %family_name, face_index, glyphs = font.glyph_count(), "font parsed");

        Ok(Self { font, family_name })
    }
}

impl GlyphRasterizer for TtfRasterizer {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn render(&self, ch: char, pixel_size: u32) -> Result<IntensityGrid> {
        if pixel_size == 0 {
            return Err(GlyphError::InvalidPixelSize(pixel_size));
        }
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(GlyphError::MissingGlyph(ch));
        }

        let (metrics, bitmap) = self.font.rasterize(ch, pixel_size as f32);
        if metrics.width == 0 || metrics.height == 0 {
            return Ok(Vec::new());
        }
        Ok(bitmap.chunks(metrics.width).map(<[u8]>::to_vec).collect())
    }
}

/// First decodable family name record. Unicode records are preferred, then
/// single-byte Macintosh records.
fn read_family_name(face: &Face<'_>) -> Option<String> {
    let families: Vec<_> = face
        .names()
        .into_iter()
        .filter(|name| name.name_id == name_id::FAMILY)
        .collect();

    families
        .iter()
        .find_map(|name| name.to_string())
        .or_else(|| {
            families
                .iter()
                .find(|name| name.platform_id == PlatformId::Macintosh && name.name.is_ascii())
                .map(|name| name.name.iter().map(|&b| b as char).collect())
        })
        .filter(|family: &String| !family.trim().is_empty())
}
