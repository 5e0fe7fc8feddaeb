//! Subscriber installation.

use super::exporter::{self, SCOPE_NAME};
use super::rotating::{RotatingWriter, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call takes effect.
///
/// ```no_run
/// use zcatalog::observability::init_tracing;
/// use zcatalog::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("zcatalog=debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    if std::fs::create_dir_all(paths::get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SCOPE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let writer = RotatingWriter::new(paths::trace_file(), DEFAULT_MAX_BYTES, DEFAULT_BACKUPS);
    let provider = exporter::create_tracer_provider(writer, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
