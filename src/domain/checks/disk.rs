use serde::Serialize;

use crate::domain::entities::disk::DiskMetrics;
use crate::domain::value_objects::{Status, Threshold};

use super::Finding;

/// Disk usage evaluated against the warning/critical cutoffs
#[derive(Debug, Clone, Serialize)]
pub struct DiskFinding {
    pub usage: f64,
    pub free: u64,
    pub total: u64,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for DiskFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(disk: &DiskMetrics, threshold: &Threshold) -> DiskFinding {
    let usage = disk.usage;
    let status = threshold.classify(usage);
    let issues = match status {
        Status::Critical => vec![format!("Disk usage is critically high: {usage}%")],
        Status::Warning => vec![format!("Disk usage is high: {usage}%")],
        Status::Normal => Vec::new(),
    };
    DiskFinding {
        usage,
        free: disk.free,
        total: disk.total,
        status,
        issues,
    }
}
