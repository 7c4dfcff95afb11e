//! Needle matrix core: configuration artifacts and the intensity → needle mapping.
//!
//! An artifact holds one font at one pixel size, with a grayscale grid per
//! character. The [`NeedleEngine`] loads an artifact and turns any character's
//! grid into a grid of needle angle pairs for a split-flap style display.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use needle_core::NeedleEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = NeedleEngine::load("font_configs/Phosphate_12.json")?;
//!
//!     match engine.map_character("A") {
//!         Some(found) => println!("A is {}x{}", found.shape.0, found.shape.1),
//!         None => println!("A is not in {}", engine.font_name()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod engine;
pub mod error;
pub mod needle;
pub mod observer;

pub use artifact::{grid_shape, ConfigArtifact, IntensityGrid};
pub use engine::NeedleEngine;
pub use error::{NeedleError, Result};
pub use needle::{
    map_grid, map_grid_observed, needle_angles, CharMatrix, IntensityBand, NeedleAngles,
    NeedleGrid,
};
pub use observer::{MappingObserver, TraceObserver};
