//! Tracing output for a sandboxed plugin.
//!
//! There is no terminal to log to and no network collector, so spans from
//! `tracing` macros are bridged to OpenTelemetry and written as OTLP JSON
//! lines to a rotating file:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → JsonFileExporter → movieseek-otlp.json
//! ```
//!
//! The level is taken from the `trace_level` plugin option.
//!
//! - [`init`]: subscriber installation
//! - `tracer`: provider and file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: size-based rotation with a few retained backups

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
