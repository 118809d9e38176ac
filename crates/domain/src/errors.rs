use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("DNS cache access denied: re-run with elevated privileges")]
    AccessDenied,

    #[error("DNS cache snapshot unavailable (status {0})")]
    SourceUnavailable(u32),

    #[error("Failed to open output file {path}: {reason}")]
    OutputSink { path: String, reason: String },

    #[error("No cached payload available for this record")]
    PayloadUnavailable,

    #[error("Malformed cache snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("The local DNS resolver cache is not accessible on this platform")]
    UnsupportedPlatform,

    #[error("I/O error: {0}")]
    Io(String),
}
