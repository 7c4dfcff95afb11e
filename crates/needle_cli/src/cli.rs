//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use needle_constant::app::{ARTIFACT_DIR, DEFAULT_PIXEL_SIZE, DESCRIPTION, NAME, VERSION};

#[derive(Parser)]
#[command(name = NAME, about = DESCRIPTION, version = VERSION, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (per-cell mapping traces)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the full character set of a font into a configuration artifact
    Build {
        /// Font file (.ttf, .otf or .ttc)
        #[arg(short, long)]
        font: PathBuf,
        /// Glyph height in pixels
        #[arg(short, long, default_value_t = DEFAULT_PIXEL_SIZE)]
        size: u32,
        /// Face to use inside a font collection
        #[arg(long, default_value_t = 0)]
        face_index: u32,
        /// Directory the artifact is written to
        #[arg(long, default_value = ARTIFACT_DIR)]
        out_dir: PathBuf,
    },
    /// Print the intensity grid of one character straight from a font
    Render {
        /// Font file (.ttf, .otf or .ttc)
        #[arg(short, long)]
        font: PathBuf,
        /// Glyph height in pixels
        #[arg(short, long, default_value_t = DEFAULT_PIXEL_SIZE)]
        size: u32,
        /// Face to use inside a font collection
        #[arg(long, default_value_t = 0)]
        face_index: u32,
        /// Character to render
        #[arg(default_value = "A")]
        ch: char,
    },
    /// Show needle angles and gray values for characters of an artifact
    Show {
        /// Artifact to load. Uses NEEDLE_CONFIG env if not set.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Characters to show
        #[arg(default_values = ["A", "1", "0"])]
        chars: Vec<String>,
    },
    /// Serve needle matrices over HTTP
    Serve {
        /// Artifact to load. Uses NEEDLE_CONFIG env if not set.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Listen host. Uses NEEDLE_HOST env if not set.
        #[arg(long)]
        host: Option<String>,
        /// Listen port. Uses NEEDLE_PORT env if not set.
        #[arg(short, long)]
        port: Option<u16>,
    },
}
