//! Tracer provider that exports spans to a local JSON file.
//!
//! The plugin sandbox has no collector to talk to, so finished spans are
//! written as OTLP JSON lines and inspected offline.

use std::future::ready;
use std::path::PathBuf;

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;

#[derive(Debug)]
struct JsonFileExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    stopped: bool,
}

impl SpanExporter for JsonFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(ready(Err(TraceError::from("trace exporter already stopped"))));
        }

        let line = self.formatter.format_batch(&batch).to_string();
        let result = self
            .writer
            .write_line(&line)
            .map_err(|e| TraceError::from(format!("writing trace file: {e}")));
        Box::pin(ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter = SpanFormatter::new(resource.clone());
    }
}

/// Builds a provider whose spans are written, one batch per line, to
/// `trace_file`.
///
/// Spans are exported as soon as they end so a crashing plugin still leaves
/// its last events on disk.
pub fn create_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonFileExporter {
        writer: FileWriter::new(trace_file),
        formatter: SpanFormatter::new(resource.clone()),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
