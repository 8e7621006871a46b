use crate::domain::entities::report::AnalysisReport;
use crate::domain::ports::sink::ReportError;

/// Renders the report as pretty-printed JSON, the machine-readable format.
/// The JSON shape is exactly the serde view of `AnalysisReport`.
pub fn render(report: &AnalysisReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
