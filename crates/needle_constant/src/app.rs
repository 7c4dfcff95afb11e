//! Application metadata constants

pub const NAME: &str = "needle";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Glyph intensity grids and needle-angle matrices for split-flap displays";

/// Directory that artifacts are written to and read from
pub const ARTIFACT_DIR: &str = "font_configs";
/// File extension of a configuration artifact
pub const ARTIFACT_EXT: &str = "json";
/// Artifact the server and `show` fall back to when none is given
pub const DEFAULT_ARTIFACT: &str = "font_configs/Phosphate_12.json";

/// Default glyph pixel height
pub const DEFAULT_PIXEL_SIZE: u32 = 12;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8081;

/// Route serving needle matrices
pub const CHAR_MATRIX_ROUTE: &str = "/get_char_matrix";
/// Character served when the request has no `char` parameter
pub const DEFAULT_CHAR: &str = "0";
