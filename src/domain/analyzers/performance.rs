use serde::Serialize;

use crate::domain::checks::{
    cpu, disk, memory, network, processes, Finding,
};
use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::value_objects::PerformanceThresholds;

use super::health::{self, HealthResult};

/// Performance view of one snapshot: cpu, memory, disk, network and process
/// pressure, plus the aggregated health for the domain.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceAnalysis {
    pub cpu: cpu::CpuFinding,
    pub memory: memory::MemoryFinding,
    pub disk: disk::DiskFinding,
    pub network: network::NetworkFinding,
    pub processes: processes::ProcessFinding,
    pub health: HealthResult,
}

/// Analyzes system performance metrics against its threshold table.
/// Pure and side-effect free; safe to invoke any number of times.
#[derive(Debug, Clone)]
pub struct PerformanceAnalyzer {
    thresholds: PerformanceThresholds,
}

impl PerformanceAnalyzer {
    #[must_use]
    pub const fn new(thresholds: PerformanceThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn analyze(&self, snapshot: &MetricsSnapshot) -> PerformanceAnalysis {
        let cpu = cpu::evaluate(&snapshot.cpu, &self.thresholds.cpu);
        let memory = memory::evaluate(&snapshot.memory, &self.thresholds.memory);
        let disk = disk::evaluate(&snapshot.disk, &self.thresholds.disk);
        let network = network::evaluate(&snapshot.network);
        let processes = processes::evaluate(&snapshot.processes);

        // Category order fixes the issue ordering in the health result.
        let health = health::aggregate([
            &cpu as &dyn Finding,
            &memory,
            &disk,
            &network,
            &processes,
        ]);

        PerformanceAnalysis {
            cpu,
            memory,
            disk,
            network,
            processes,
            health,
        }
    }
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new(PerformanceThresholds::default())
    }
}
