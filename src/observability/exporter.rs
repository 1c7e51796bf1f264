//! `SpanExporter` that appends OTLP-JSON lines to a rotating file.

use super::otlp;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

/// Writes each exported batch as one OTLP-JSON `ExportTraceServiceRequest`
/// line.
#[derive(Debug)]
pub struct OtlpFileExporter {
    /// Destination of the encoded batches.
    file: RotatingFile,
    /// Resource attributes stamped on every batch.
    resource: Resource,
    /// Instrumentation scope name.
    scope: &'static str,
    /// Set by `shutdown`; later exports fail.
    stopped: bool,
}

impl OtlpFileExporter {
    /// Creates an exporter writing to `file`.
    #[must_use]
    pub const fn new(file: RotatingFile, resource: Resource, scope: &'static str) -> Self {
        Self {
            file,
            resource,
            scope,
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("trace file exporter is shut down"));
        }

        let document = otlp::encode_batch(&self.resource, self.scope, batch);
        self.file
            .append_line(&document.to_string())
            .map_err(|e| TraceError::from(format!("{}: {e}", self.file.path().display())))
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span straight to `path`.
///
/// The simple (unbatched) processor is used since the plugin has no
/// background runtime to drive a batch processor.
pub fn file_tracer_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = OtlpFileExporter::new(RotatingFile::new(path), resource.clone(), scope);

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
