//! Subscriber setup wiring `tracing` into the file exporter.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{span_formatter::SCOPE_NAME, tracer};
use crate::infrastructure::paths;
use crate::Config;

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "movieseek-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `"debug"` or `"movieseek::search=trace"`) and defaults to `"info"`.
/// Spans land in `~/.local/share/zellij/movieseek/movieseek-otlp.json`.
///
/// Tracing is best effort: if the data directory cannot be created, or a
/// subscriber is already installed, the call does nothing.
///
/// # Example
///
/// ```rust,no_run
/// use movieseek::observability::init_tracing;
/// use movieseek::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("movieseek: invalid trace_level {directive:?} ({e}), using info");
        EnvFilter::new("info")
    });

    let data_dir = paths::get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("movieseek: tracing disabled, cannot create {}: {e}", data_dir.display());
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    if subscriber.try_init().is_err() {
        eprintln!("movieseek: a tracing subscriber is already installed");
    }
}
