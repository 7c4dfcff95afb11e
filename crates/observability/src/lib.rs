//! Observability for needle-matrix: one call to install a `tracing` subscriber.
//!
//! ```no_run
//! use needle_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("needle-server").with_log_level("debug");
//! init(config).expect("subscriber");
//! tracing::info!("service started");
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` - Service name
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint; enables span export
//! - `NEEDLE_LOG` or `RUST_LOG` - Filter directive

pub mod config;
pub mod error;
pub mod spans;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use spans::record_duration;
pub use telemetry::{init, shutdown};
