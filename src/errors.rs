use thiserror::Error;

/// Cell-scoped conversion failure. Never aborts a row or column: the
/// caller skips the offending cell and reports a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoerceError {
    #[error("not a number")]
    NotANumber,
    #[error("out of range")]
    OutOfRange,
}

/// Job-scoped failure. The affected job stops, the batch continues with
/// the next one.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("unable to open {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no data read from {path}")]
    EmptyTable { path: String },
}
