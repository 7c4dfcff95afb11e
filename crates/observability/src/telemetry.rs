//! Subscriber setup: env filter, console output, optional OTLP span export.

use once_cell::sync::OnceCell;
use opentelemetry::{global, trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

// Kept so `shutdown` can flush pending spans
static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Install the global subscriber.
///
/// OTLP export is attempted only when an endpoint is configured; if the exporter
/// cannot be built, logging continues console-only. Must be called from within a
/// tokio runtime when an endpoint is set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = EnvFilter::try_new(config.filter_directive())
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut export_error = None;
    let otel_layer = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => match build_tracer(&config, endpoint) {
            Ok(tracer) => Some(OpenTelemetryLayer::new(tracer)),
            Err(e) => {
                export_error = Some(e);
                None
            }
        },
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;

    match (&config.otlp_endpoint, export_error) {
        (Some(endpoint), Some(e)) => tracing::warn!(
            otlp.endpoint = %endpoint,
            error = %e,
            "span export unavailable, logging to console only"
        ),
        (Some(endpoint), None) => tracing::info!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            "OTLP export enabled"
        ),
        (None, _) => tracing::debug!(service.name = %config.service_name, "tracing initialized"),
    }
    Ok(())
}

fn build_tracer(
    config: &ObservabilityConfig,
    endpoint: &str,
) -> Result<SdkTracer, ObservabilityError> {
    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    let resource = Resource::builder().with_attributes(attributes).build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::Exporter(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(config.service_name.clone());
    global::set_tracer_provider(provider.clone());
    let _ = TRACER_PROVIDER.set(provider);
    Ok(tracer)
}

/// Flush and stop span export. No-op when export was never enabled.
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        let _ = provider.shutdown();
    }
}
