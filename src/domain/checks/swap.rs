use serde::Serialize;

use crate::domain::entities::snapshot::SwapMetrics;
use crate::domain::value_objects::{Status, Threshold};

use super::Finding;

/// Swap usage evaluated against the warning/critical cutoffs
#[derive(Debug, Clone, Serialize)]
pub struct SwapFinding {
    pub usage: f64,
    pub free: u64,
    pub total: u64,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for SwapFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(swap: &SwapMetrics, threshold: &Threshold) -> SwapFinding {
    let usage = swap.usage;
    let status = threshold.classify(usage);
    let issues = match status {
        Status::Critical => vec![format!("Swap usage is critically high: {usage}%")],
        Status::Warning => vec![format!("Swap usage is high: {usage}%")],
        Status::Normal => Vec::new(),
    };
    SwapFinding {
        usage,
        free: swap.free,
        total: swap.total,
        status,
        issues,
    }
}
