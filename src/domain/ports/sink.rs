use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::report::AnalysisReport;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unsupported report format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Consumer of the combined analysis results. Implementations own the output
/// format entirely; the analysis side never sees files or templates.
pub trait ReportSink: Send + Sync {
    /// Render the report, returning the paths of the artifacts written.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` for an unsupported configured format or any
    /// rendering/write failure.
    fn write(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>, ReportError>;
}
