use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::analyzers::{PerformanceAnalysis, ResourceAnalysis, SecurityAnalysis};

use super::snapshot::SystemInfo;

/// The combined output of one run: the three domain analyses side by side.
/// This is the entire contract between analysis and reporting; domains
/// disabled in configuration are simply absent.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub system: SystemInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceAnalysis>,
}
