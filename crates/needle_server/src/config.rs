//! Server configuration

use std::path::PathBuf;

use needle_constant::app::{DEFAULT_ARTIFACT, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Artifact loaded at startup
    pub artifact_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `NEEDLE_CONFIG` (artifact path), `NEEDLE_HOST`, `NEEDLE_PORT`.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("NEEDLE_CONFIG") {
            config.artifact_path = PathBuf::from(path);
        }

        if let Ok(host) = std::env::var("NEEDLE_HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("NEEDLE_PORT") {
            if let Ok(val) = port.parse::<u16>() {
                config.port = val;
            }
        }

        config
    }

    /// `host:port`; the host may be a name, resolved at bind time.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
