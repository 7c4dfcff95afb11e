//! Logging and trace export configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "needle";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,

    pub service_version: Option<String>,

    /// OTLP gRPC endpoint (e.g. "http://localhost:4317"). Export is off when unset.
    pub otlp_endpoint: Option<String>,

    /// Write formatted events to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// `EnvFilter` directive (e.g. "info", "needle_core=trace"); falls back to `RUST_LOG`, then "info"
    pub log_level: Option<String>,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint
    /// - `NEEDLE_LOG`, then `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| default_service_name());

        let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty());

        let log_level = std::env::var("NEEDLE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name,
            otlp_endpoint,
            log_level,
            ..Default::default()
        }
    }

    /// Filter directive that `init` will install.
    pub fn filter_directive(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
