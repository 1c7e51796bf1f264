//! Span export to a local OTLP-JSON file.
//!
//! The plugin runs sandboxed without network access, so spans recorded with
//! `tracing` are bridged into OpenTelemetry and appended to a file in the data
//! directory instead of being shipped to a collector:
//!
//! ```text
//! tracing → tracing-opentelemetry → OtlpFileExporter → contacts-otlp.json
//! ```
//!
//! Each export call writes one line holding a complete OTLP `resourceSpans`
//! document. The file rotates at 10 MB and keeps three numbered backups.
//!
//! The level comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive, e.g. `"zellij_contacts=debug"`.

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
