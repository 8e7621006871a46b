use serde::Serialize;

use crate::domain::entities::snapshot::MemoryMetrics;
use crate::domain::value_objects::{Status, Threshold};

use super::Finding;

/// Memory usage evaluated against the warning/critical cutoffs
#[derive(Debug, Clone, Serialize)]
pub struct MemoryFinding {
    pub usage: f64,
    pub available: u64,
    pub total: u64,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for MemoryFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(memory: &MemoryMetrics, threshold: &Threshold) -> MemoryFinding {
    let usage = memory.usage;
    let status = threshold.classify(usage);
    let issues = match status {
        Status::Critical => vec![format!("Memory usage is critically high: {usage}%")],
        Status::Warning => vec![format!("Memory usage is high: {usage}%")],
        Status::Normal => Vec::new(),
    };
    MemoryFinding {
        usage,
        available: memory.available,
        total: memory.total,
        status,
        issues,
    }
}
