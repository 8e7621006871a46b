use serde::Serialize;

use crate::domain::checks::{disk, filesystem, memory, processes, swap, Finding};
use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::value_objects::ResourceThresholds;

use super::health::{self, HealthResult};

/// Resource-utilization view of one snapshot. Overlaps with the performance
/// domain on disk and memory on purpose: each domain is self-contained and
/// independently testable, and the evaluation is pure and cheap.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceAnalysis {
    pub disk: disk::DiskFinding,
    pub memory: memory::MemoryFinding,
    pub swap: swap::SwapFinding,
    pub file_system: filesystem::FileSystemFinding,
    pub processes: processes::ProcessFinding,
    pub health: HealthResult,
}

/// Analyzes resource utilization against its threshold table
#[derive(Debug, Clone)]
pub struct ResourceAnalyzer {
    thresholds: ResourceThresholds,
}

impl ResourceAnalyzer {
    #[must_use]
    pub const fn new(thresholds: ResourceThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn analyze(&self, snapshot: &MetricsSnapshot) -> ResourceAnalysis {
        let disk = disk::evaluate(&snapshot.disk, &self.thresholds.disk);
        let memory = memory::evaluate(&snapshot.memory, &self.thresholds.memory);
        let swap = swap::evaluate(&snapshot.swap, &self.thresholds.swap);
        let file_system = filesystem::evaluate(&snapshot.file_system);
        let processes = processes::evaluate_with_zombies(&snapshot.processes);

        let health = health::aggregate([
            &disk as &dyn Finding,
            &memory,
            &swap,
            &file_system,
            &processes,
        ]);

        ResourceAnalysis {
            disk,
            memory,
            swap,
            file_system,
            processes,
            health,
        }
    }
}

impl Default for ResourceAnalyzer {
    fn default() -> Self {
        Self::new(ResourceThresholds::default())
    }
}
