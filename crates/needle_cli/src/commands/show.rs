//! `needle show`

use std::path::PathBuf;

use anyhow::Result;
use needle_core::{NeedleEngine, TraceObserver};
use needle_server::ServerConfig;

use crate::output;

pub fn handle(config: Option<PathBuf>, chars: &[String]) -> Result<()> {
    let path = config.unwrap_or_else(|| ServerConfig::from_env().artifact_path);
    let engine = NeedleEngine::load(&path)?;

    for ch in chars {
        let Some(found) = engine.map_character_observed(ch, &TraceObserver) else {
            output::warning(&format!("Character '{ch}' not found in config"));
            continue;
        };
        output::data(ch, &found);
        output::header(&format!("Display info for character '{ch}'"));
        output::kv("shape", &format!("{}x{}", found.shape.0, found.shape.1));
        output::needle_grid(&found.matrix, &found.gray_matrix);
        output::gray_grid(&found.gray_matrix);
    }
    Ok(())
}
