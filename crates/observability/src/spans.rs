//! Span helpers shared by the builder, engine callers and server.

/// Span around work on one configuration artifact.
///
/// ```rust
/// use needle_observability::artifact_span;
///
/// let span = artifact_span!("build", "font_configs/Phosphate_12.json");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! artifact_span {
    ($operation:expr, $path:expr) => {
        tracing::info_span!(
            "artifact",
            operation = $operation,
            artifact.path = %$path,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Record elapsed time on the current span under `key`.
///
/// The span must declare `key` as a field (see [`artifact_span!`]).
pub fn record_duration(key: &str, duration: std::time::Duration) {
    tracing::Span::current().record(key, duration.as_millis() as u64);
}
