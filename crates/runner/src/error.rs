use thiserror::Error;

use common::error::Error as BenchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Logging setup failed: {0}")]
    LoggingSetupFailed(String),

    #[error("Benchmark error: {0}")]
    Bench(#[from] BenchError),

    #[error("Failed to write report: {0}")]
    ReportWriteFailed(#[from] std::io::Error),
}

impl Error {
    /// True when the failure already produced its own line on the report stream.
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::Bench(BenchError::GenerationExhausted { .. }))
    }
}
