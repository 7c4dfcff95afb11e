//! Command dispatch.

pub mod build;
pub mod render;
pub mod serve;
pub mod show;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            font,
            size,
            face_index,
            out_dir,
        } => build::handle(&font, size, face_index, &out_dir),
        Command::Render {
            font,
            size,
            face_index,
            ch,
        } => render::handle(&font, size, face_index, ch),
        Command::Show { config, chars } => show::handle(config, &chars),
        Command::Serve { config, host, port } => serve::handle(config, host, port).await,
    }
}
