use tracing::{error, info, warn};

/// A structured diagnostic raised while processing a job. None of these
/// abort the batch; the pipeline reports them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagEvent {
    /// An input or output file could not be opened.
    FileOpenFailed { path: String, reason: String },
    /// The input table loaded with zero rows.
    EmptyTable { path: String },
    /// A requested column is absent from the header; raised once per
    /// offending row per column.
    MissingColumn { file: String, column: String },
    /// A cell could not be converted to a number.
    BadCell {
        file: String,
        column: String,
        cell: String,
        reason: String,
    },
    /// The job spec has no `columns` entry. Informational, not an error.
    JobSkipped { key: String },
}

/// Sink for pipeline diagnostics. Injected rather than global so each
/// pipeline run is testable in isolation.
pub trait Diagnostics {
    fn report(&mut self, event: DiagEvent);
}

/// Production sink: forwards every event to `tracing`.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, event: DiagEvent) {
        match event {
            DiagEvent::FileOpenFailed { path, reason } => {
                error!(%path, %reason, "unable to open file");
            }
            DiagEvent::EmptyTable { path } => {
                error!(%path, "no data read");
            }
            DiagEvent::MissingColumn { file, column } => {
                warn!(%file, %column, "column not found in header, skipping for this row");
            }
            DiagEvent::BadCell {
                file,
                column,
                cell,
                reason,
            } => {
                warn!(%file, %column, %cell, %reason, "skipping value");
            }
            DiagEvent::JobSkipped { key } => {
                info!(%key, "job has no columns entry, skipping");
            }
        }
    }
}

/// Sink that keeps every event in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    pub events: Vec<DiagEvent>,
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&mut self, event: DiagEvent) {
        self.events.push(event);
    }
}
