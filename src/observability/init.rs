//! Subscriber setup.

use super::exporter::file_tracer_provider;
use crate::domain::{ContactsError, Result};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "contacts-otlp.json";

const SERVICE_NAME: &str = "ContactManager";

/// Installs the global subscriber: an `EnvFilter` from `config.trace_level`
/// in front of the OpenTelemetry layer.
///
/// Tracing is best effort: on failure the plugin silently runs without a
/// subscriber. A second call is a no-op.
pub fn init_tracing(config: &Config) {
    let _ = try_init_tracing(config);
}

fn try_init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.trace_level).map_err(|e| {
        ContactsError::Config(format!("invalid trace_level {:?}: {e}", config.trace_level))
    })?;

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
    Ok(())
}
