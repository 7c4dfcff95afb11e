//! Error types for the observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// OTLP exporter could not be built
    #[error("Failed to initialize OTLP export: {0}")]
    Exporter(String),

    /// A global subscriber is already installed
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
