//! CLI entry point for needle-matrix.

mod cli;
mod commands;
mod output;

use clap::Parser;
use needle_constant::app::VERSION;
use needle_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load `.env` from the working directory or the nearest parent that has one.
fn load_env_file() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        if !dir.pop() {
            return;
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let mut config = ObservabilityConfig::from_env().with_version(VERSION);
    if verbose {
        config = config.with_log_level("debug,needle_core=trace");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn,needle_server=info,tower_http=info");
    }
    needle_observability::init(config)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = init_logging(cli.verbose) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
