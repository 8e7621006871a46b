use serde::Serialize;

use crate::domain::entities::snapshot::CpuMetrics;
use crate::domain::value_objects::{Status, Threshold};

use super::Finding;

/// CPU usage evaluated against the warning/critical cutoffs
#[derive(Debug, Clone, Serialize)]
pub struct CpuFinding {
    pub usage: f64,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for CpuFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(cpu: &CpuMetrics, threshold: &Threshold) -> CpuFinding {
    let usage = cpu.usage;
    let status = threshold.classify(usage);
    let issues = match status {
        Status::Critical => vec![format!("CPU usage is critically high: {usage}%")],
        Status::Warning => vec![format!("CPU usage is high: {usage}%")],
        Status::Normal => Vec::new(),
    };
    CpuFinding {
        usage,
        status,
        issues,
    }
}
