//! `needle serve`

use std::path::PathBuf;

use anyhow::Result;
use needle_server::ServerConfig;

pub async fn handle(config: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server = ServerConfig::from_env();
    if let Some(path) = config {
        server.artifact_path = path;
    }
    if let Some(host) = host {
        server = server.with_host(host);
    }
    if let Some(port) = port {
        server = server.with_port(port);
    }

    let result = needle_server::serve(server).await;
    needle_observability::shutdown();
    Ok(result?)
}
