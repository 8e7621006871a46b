use serde::Serialize;

use crate::domain::entities::process::{ProcessRecord, ProcessState};
use crate::domain::value_objects::Status;

use super::Finding;

/// Fixed per-process cutoffs. Deliberately constants rather than entries in
/// the threshold tables: the configurable thresholds classify whole-host
/// usage percentages, these classify individual processes.
const HIGH_CPU_PERCENT: f64 = 50.0;
const HIGH_MEMORY_PERCENT: f64 = 5.0;
/// More than this many intensive processes raises a warning.
const INTENSIVE_PROCESS_LIMIT: usize = 5;

/// Reference to a process that tripped one of the per-process checks
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRef {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

impl From<&ProcessRecord> for ProcessRef {
    fn from(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid,
            name: record.name.clone(),
            cpu_percent: record.cpu_percent,
            memory_percent: record.memory_percent,
        }
    }
}

/// Process population partitioned into noteworthy subsets
#[derive(Debug, Clone, Serialize)]
pub struct ProcessFinding {
    pub total: usize,
    pub high_cpu: Vec<ProcessRef>,
    pub high_memory: Vec<ProcessRef>,
    /// Only populated by the resource-domain variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zombies: Option<Vec<ProcessRef>>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for ProcessFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

/// Performance-domain variant: flags CPU- and memory-intensive processes.
/// There is no critical path here; the worst outcome is Warning.
#[must_use]
pub fn evaluate(processes: &[ProcessRecord]) -> ProcessFinding {
    let (high_cpu, high_memory) = partition_intensive(processes);

    let mut status = Status::Normal;
    let mut issues = Vec::new();
    push_intensive_issues(&high_cpu, &high_memory, &mut status, &mut issues);

    ProcessFinding {
        total: processes.len(),
        high_cpu,
        high_memory,
        zombies: None,
        status,
        issues,
    }
}

/// Resource-domain variant: additionally flags zombie processes. Any zombie
/// at all raises a warning, reported ahead of the intensive-process issues.
#[must_use]
pub fn evaluate_with_zombies(processes: &[ProcessRecord]) -> ProcessFinding {
    let (high_cpu, high_memory) = partition_intensive(processes);
    let zombies: Vec<ProcessRef> = processes
        .iter()
        .filter(|p| p.state == ProcessState::Zombie)
        .map(ProcessRef::from)
        .collect();

    let mut status = Status::Normal;
    let mut issues = Vec::new();
    if !zombies.is_empty() {
        status = Status::Warning;
        issues.push(format!("Found {} zombie processes", zombies.len()));
    }
    push_intensive_issues(&high_cpu, &high_memory, &mut status, &mut issues);

    ProcessFinding {
        total: processes.len(),
        high_cpu,
        high_memory,
        zombies: Some(zombies),
        status,
        issues,
    }
}

fn partition_intensive(processes: &[ProcessRecord]) -> (Vec<ProcessRef>, Vec<ProcessRef>) {
    let high_cpu = processes
        .iter()
        .filter(|p| p.cpu_percent > HIGH_CPU_PERCENT)
        .map(ProcessRef::from)
        .collect();
    let high_memory = processes
        .iter()
        .filter(|p| p.memory_percent > HIGH_MEMORY_PERCENT)
        .map(ProcessRef::from)
        .collect();
    (high_cpu, high_memory)
}

fn push_intensive_issues(
    high_cpu: &[ProcessRef],
    high_memory: &[ProcessRef],
    status: &mut Status,
    issues: &mut Vec<String>,
) {
    if high_cpu.len() > INTENSIVE_PROCESS_LIMIT {
        *status = Status::Warning;
        issues.push(format!(
            "High number of CPU-intensive processes: {}",
            high_cpu.len()
        ));
    }
    if high_memory.len() > INTENSIVE_PROCESS_LIMIT {
        *status = Status::Warning;
        issues.push(format!(
            "High number of memory-intensive processes: {}",
            high_memory.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(pid: u32, cpu_percent: f64, memory_percent: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: format!("proc{pid}"),
            user: "root".to_string(),
            state: ProcessState::Running,
            cpu_percent,
            memory_percent,
        }
    }

    fn make_zombie(pid: u32) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: format!("zombie{pid}"),
            user: "root".to_string(),
            state: ProcessState::Zombie,
            cpu_percent: 0.0,
            memory_percent: 0.0,
        }
    }

    #[test]
    fn empty_process_list_is_normal() {
        let finding = evaluate(&[]);
        assert_eq!(finding.status, Status::Normal);
        assert_eq!(finding.total, 0);
        assert!(finding.issues.is_empty());
        assert!(finding.zombies.is_none());
    }

    #[test]
    fn cpu_cutoff_is_strictly_greater() {
        let procs = vec![make_process(1, 50.0, 0.0), make_process(2, 50.1, 0.0)];
        let finding = evaluate(&procs);
        assert_eq!(finding.high_cpu.len(), 1);
        assert_eq!(finding.high_cpu[0].pid, 2);
    }

    #[test]
    fn memory_cutoff_is_strictly_greater() {
        let procs = vec![make_process(1, 0.0, 5.0), make_process(2, 0.0, 5.1)];
        let finding = evaluate(&procs);
        assert_eq!(finding.high_memory.len(), 1);
        assert_eq!(finding.high_memory[0].pid, 2);
    }

    #[test]
    fn five_intensive_processes_stay_normal() {
        let procs: Vec<ProcessRecord> = (1..=5).map(|pid| make_process(pid, 90.0, 0.0)).collect();
        let finding = evaluate(&procs);
        assert_eq!(finding.status, Status::Normal);
        assert!(finding.issues.is_empty());
    }

    #[test]
    fn six_cpu_intensive_processes_warn() {
        let procs: Vec<ProcessRecord> = (1..=6).map(|pid| make_process(pid, 90.0, 0.0)).collect();
        let finding = evaluate(&procs);
        assert_eq!(finding.status, Status::Warning);
        assert_eq!(
            finding.issues,
            vec!["High number of CPU-intensive processes: 6".to_string()]
        );
    }

    #[test]
    fn six_memory_intensive_processes_warn() {
        let procs: Vec<ProcessRecord> = (1..=6).map(|pid| make_process(pid, 0.0, 10.0)).collect();
        let finding = evaluate(&procs);
        assert_eq!(finding.status, Status::Warning);
        assert!(finding.issues[0].contains("memory-intensive"));
    }

    #[test]
    fn performance_variant_ignores_zombies() {
        let procs = vec![make_zombie(1), make_zombie(2)];
        let finding = evaluate(&procs);
        assert_eq!(finding.status, Status::Normal);
        assert!(finding.zombies.is_none());
    }

    #[test]
    fn resource_variant_warns_on_single_zombie() {
        let procs = vec![make_process(1, 10.0, 1.0), make_zombie(2)];
        let finding = evaluate_with_zombies(&procs);
        assert_eq!(finding.status, Status::Warning);
        assert_eq!(finding.issues, vec!["Found 1 zombie processes".to_string()]);
        let zombies = finding.zombies.as_deref().unwrap_or(&[]);
        assert_eq!(zombies.len(), 1);
        assert_eq!(zombies[0].pid, 2);
    }

    #[test]
    fn zombie_issue_comes_before_intensive_issues() {
        let mut procs: Vec<ProcessRecord> =
            (1..=6).map(|pid| make_process(pid, 90.0, 0.0)).collect();
        procs.push(make_zombie(7));
        let finding = evaluate_with_zombies(&procs);
        assert_eq!(finding.status, Status::Warning);
        assert_eq!(finding.issues.len(), 2);
        assert!(finding.issues[0].contains("zombie"));
        assert!(finding.issues[1].contains("CPU-intensive"));
    }

    #[test]
    fn never_escalates_to_critical() {
        let mut procs: Vec<ProcessRecord> =
            (1..=50).map(|pid| make_process(pid, 99.0, 50.0)).collect();
        procs.extend((51..=60).map(make_zombie));
        let finding = evaluate_with_zombies(&procs);
        assert_eq!(finding.status, Status::Warning);
    }
}
