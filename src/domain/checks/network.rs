use serde::Serialize;

use crate::domain::entities::snapshot::NetworkMetrics;
use crate::domain::value_objects::Status;

use super::Finding;

/// Network counters passed through for reporting. No threshold rules exist
/// for this category yet, so the status is always Normal; this is a
/// deliberate placeholder for future traffic-pattern checks, not a bug.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkFinding {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for NetworkFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(network: &NetworkMetrics) -> NetworkFinding {
    NetworkFinding {
        bytes_sent: network.bytes_sent,
        bytes_recv: network.bytes_recv,
        packets_sent: network.packets_sent,
        packets_recv: network.packets_recv,
        status: Status::Normal,
        issues: Vec::new(),
    }
}
