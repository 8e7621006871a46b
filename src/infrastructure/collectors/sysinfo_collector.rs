use std::sync::Mutex;

use sysinfo::{Disks, Networks, System};
use tracing::debug;

use super::fs_walker::FsWalker;
use super::security_probe::SecurityProbe;
use crate::application::config::CollectionConfig;
use crate::domain::entities::disk::{DiskMetrics, DiskPartition};
use crate::domain::entities::process::{ProcessRecord, ProcessState};
use crate::domain::entities::snapshot::{
    CpuMetrics, MemoryMetrics, MetricsSnapshot, NetworkMetrics, SwapMetrics, SystemInfo,
};
use crate::domain::ports::collector::{CollectionError, MetricsSource};

/// Filesystem types to exclude from disk metrics.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "tmpfs",
    "devtmpfs",
    "sysfs",
    "proc",
    "cgroup2",
    "overlay",
    "squashfs",
    "efivarfs",
    "bpf",
    "hugetlbfs",
    "mqueue",
    "pstore",
    "securityfs",
    "debugfs",
    "tracefs",
    "fusectl",
    "rpc_pipefs",
];

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        (numerator as f64 / denominator as f64) * 100.0
    } else {
        0.0
    }
}

/// Returns the arithmetic mean of `per_core` usages, or `0.0` when the slice is empty.
#[allow(clippy::cast_precision_loss)]
fn avg_cpu_usage(per_core: &[f32]) -> f64 {
    let count = per_core.len();
    if count > 0 {
        f64::from(per_core.iter().sum::<f32>()) / count as f64
    } else {
        0.0
    }
}

/// Collects the full metrics snapshot using the `sysinfo` crate plus the
/// host probes for security and filesystem data.
///
/// Uses `Mutex<System>` for interior mutability since the `MetricsSource`
/// trait requires `&self` but `sysinfo::System` needs `&mut self` for refresh.
pub struct SysinfoCollector {
    sys: Mutex<System>,
    security_probe: SecurityProbe,
    fs_walker: FsWalker,
}

impl SysinfoCollector {
    /// Creates a new collector with pre-initialized system data.
    #[must_use]
    pub fn new(config: &CollectionConfig) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            security_probe: SecurityProbe::new(),
            fs_walker: FsWalker::new(config),
        }
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new(&CollectionConfig::default())
    }
}

impl MetricsSource for SysinfoCollector {
    fn collect(&self) -> Result<MetricsSnapshot, CollectionError> {
        let mut sys = self.sys.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}"))
        })?;
        sys.refresh_all();

        let system = collect_system_info();
        let cpu = collect_cpu(&sys);
        let memory = collect_memory(&sys);
        let swap = collect_swap(&sys);
        let processes = collect_processes(&sys);
        drop(sys);

        let disk = collect_disks();
        let network = collect_network();

        debug!("probing security state");
        let ports = self.security_probe.listening_ports();
        let services = self.security_probe.running_services();
        let updates = self.security_probe.pending_updates();
        let firewall = self.security_probe.firewall_state();
        let antivirus = self.security_probe.antivirus_state(&processes);
        let ssl = self.security_probe.ssl_certificates();

        debug!("walking filesystem");
        let file_system = self.fs_walker.walk();

        Ok(MetricsSnapshot {
            timestamp: chrono::Utc::now(),
            system,
            cpu,
            memory,
            swap,
            disk,
            network,
            processes,
            file_system,
            ports,
            services,
            updates,
            firewall,
            antivirus,
            ssl,
        })
    }
}

fn collect_system_info() -> SystemInfo {
    let boot_time = i64::try_from(System::boot_time())
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));

    SystemInfo {
        hostname: System::host_name().unwrap_or_default(),
        platform: System::name().unwrap_or_default(),
        platform_version: System::os_version().unwrap_or_default(),
        architecture: System::cpu_arch(),
        boot_time,
    }
}

fn collect_cpu(sys: &System) -> CpuMetrics {
    let cpus = sys.cpus();
    let per_core_usage: Vec<f32> = cpus.iter().map(sysinfo::Cpu::cpu_usage).collect();
    let load_avg = System::load_average();

    CpuMetrics {
        usage: avg_cpu_usage(&per_core_usage),
        core_count: cpus.len(),
        frequency_mhz: cpus.first().map(sysinfo::Cpu::frequency),
        load_avg_1m: load_avg.one,
        load_avg_5m: load_avg.five,
        load_avg_15m: load_avg.fifteen,
    }
}

fn collect_memory(sys: &System) -> MemoryMetrics {
    let total = sys.total_memory();
    let used = sys.used_memory();

    MemoryMetrics {
        usage: safe_percent(used, total),
        total,
        used,
        available: sys.available_memory(),
    }
}

fn collect_swap(sys: &System) -> SwapMetrics {
    let total = sys.total_swap();
    let used = sys.used_swap();

    SwapMetrics {
        usage: safe_percent(used, total),
        total,
        used,
        free: sys.free_swap(),
    }
}

/// Aggregates real mounted partitions, skipping pseudo-filesystems and
/// zero-size disks.
fn collect_disks() -> DiskMetrics {
    let disks = Disks::new_with_refreshed_list();

    let mut total = 0_u64;
    let mut free = 0_u64;
    let mut partitions = Vec::new();

    for disk in disks
        .iter()
        .filter(|d| {
            let fs = d.file_system().to_string_lossy();
            !PSEUDO_FILESYSTEMS.iter().any(|&pseudo| fs == pseudo) && d.total_space() > 0
        })
    {
        let part_total = disk.total_space();
        let part_free = disk.available_space();
        let part_used = part_total.saturating_sub(part_free);

        total += part_total;
        free += part_free;

        partitions.push(DiskPartition {
            device: disk.name().to_string_lossy().to_string(),
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            fstype: disk.file_system().to_string_lossy().to_string(),
            total: part_total,
            used: part_used,
            free: part_free,
            usage: safe_percent(part_used, part_total),
        });
    }

    let used = total.saturating_sub(free);

    DiskMetrics {
        usage: safe_percent(used, total),
        total,
        used,
        free,
        partitions,
    }
}

/// Sums interface counters since boot across all interfaces.
fn collect_network() -> NetworkMetrics {
    let networks = Networks::new_with_refreshed_list();

    let mut metrics = NetworkMetrics::default();
    for (_name, data) in &networks {
        metrics.bytes_sent += data.total_transmitted();
        metrics.bytes_recv += data.total_received();
        metrics.packets_sent += data.total_packets_transmitted();
        metrics.packets_recv += data.total_packets_received();
        metrics.errors_in += data.total_errors_on_received();
        metrics.errors_out += data.total_errors_on_transmitted();
    }
    metrics
}

#[allow(clippy::cast_precision_loss)]
fn collect_processes(sys: &System) -> Vec<ProcessRecord> {
    let total_memory = sys.total_memory();

    sys.processes()
        .values()
        .map(|proc_info| {
            let memory_percent = safe_percent(proc_info.memory(), total_memory);

            let user = proc_info
                .user_id()
                .map_or_else(|| "unknown".to_string(), |uid| uid.to_string());

            ProcessRecord {
                pid: proc_info.pid().as_u32(),
                name: proc_info.name().to_string_lossy().to_string(),
                user,
                state: map_process_status(proc_info.status()),
                cpu_percent: f64::from(proc_info.cpu_usage()),
                memory_percent,
            }
        })
        .collect()
}

const fn map_process_status(status: sysinfo::ProcessStatus) -> ProcessState {
    match status {
        sysinfo::ProcessStatus::Run => ProcessState::Running,
        sysinfo::ProcessStatus::Sleep
        | sysinfo::ProcessStatus::Idle
        | sysinfo::ProcessStatus::UninterruptibleDiskSleep
        | sysinfo::ProcessStatus::Parked
        | sysinfo::ProcessStatus::Waking
        | sysinfo::ProcessStatus::Wakekill => ProcessState::Sleeping,
        sysinfo::ProcessStatus::Zombie => ProcessState::Zombie,
        sysinfo::ProcessStatus::Stop | sysinfo::ProcessStatus::Tracing => ProcessState::Stopped,
        sysinfo::ProcessStatus::Dead => ProcessState::Dead,
        _ => ProcessState::Unknown,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn test_collector() -> SysinfoCollector {
        let config = CollectionConfig {
            root_directory: std::env::temp_dir(),
            max_files: 100,
            scan_file_system: false,
        };
        SysinfoCollector::new(&config)
    }

    #[test]
    fn collect_returns_valid_snapshot() {
        let collector = test_collector();
        let snapshot = collector.collect().expect("collect should succeed");

        assert!(snapshot.memory.total > 0, "total RAM should be > 0");
        assert!(snapshot.memory.usage >= 0.0);
        assert!(snapshot.memory.usage <= 100.0);
        assert!(snapshot.cpu.core_count > 0, "should have at least 1 core");
        assert!(
            !snapshot.processes.is_empty(),
            "should have at least 1 process"
        );
    }

    #[test]
    fn processes_include_self() {
        let collector = test_collector();
        let snapshot = collector.collect().expect("collect should succeed");

        let my_pid = std::process::id();
        let me = snapshot.processes.iter().find(|p| p.pid == my_pid);
        assert!(me.is_some(), "should find own process (pid {my_pid})");

        let me = me.expect("verified above");
        assert!(!me.name.is_empty(), "process name should not be empty");
    }

    #[test]
    fn process_memory_percent_in_valid_range() {
        let collector = test_collector();
        let snapshot = collector.collect().expect("collect should succeed");

        for process in &snapshot.processes {
            assert!(
                (0.0..=100.0).contains(&process.memory_percent),
                "pid {pid} memory {pct}% should be in [0, 100]",
                pid = process.pid,
                pct = process.memory_percent
            );
        }
    }

    #[test]
    fn process_state_mapping() {
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Run),
            ProcessState::Running
        );
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Sleep),
            ProcessState::Sleeping
        );
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Zombie),
            ProcessState::Zombie
        );
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Stop),
            ProcessState::Stopped
        );
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Dead),
            ProcessState::Dead
        );
        assert_eq!(
            map_process_status(sysinfo::ProcessStatus::Unknown(999)),
            ProcessState::Unknown
        );
    }

    #[test]
    fn disk_partitions_exclude_pseudo_filesystems() {
        let disk = collect_disks();
        for partition in &disk.partitions {
            assert!(
                !PSEUDO_FILESYSTEMS.contains(&partition.fstype.as_str()),
                "pseudo-filesystem {fs} should be filtered",
                fs = partition.fstype
            );
        }
    }

    #[test]
    fn disk_usage_percent_in_valid_range() {
        let disk = collect_disks();
        assert!((0.0..=100.0).contains(&disk.usage));
        for partition in &disk.partitions {
            assert!(
                (0.0..=100.0).contains(&partition.usage),
                "partition {mp} usage {pct}% should be in [0, 100]",
                mp = partition.mount_point,
                pct = partition.usage
            );
        }
    }

    #[test]
    fn system_info_has_hostname() {
        let info = collect_system_info();
        assert!(!info.hostname.is_empty(), "hostname should be detected");
        assert!(!info.architecture.is_empty());
    }

    #[test]
    fn safe_percent_returns_zero_for_zero_denominator() {
        assert!((safe_percent(100, 0) - 0.0).abs() < f64::EPSILON);
        assert!((safe_percent(0, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn safe_percent_computes_correctly() {
        assert!((safe_percent(50, 100) - 50.0).abs() < f64::EPSILON);
        assert!((safe_percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_cpu_usage_returns_zero_for_empty_slice() {
        assert!((avg_cpu_usage(&[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_cpu_usage_computes_mean() {
        let usage = avg_cpu_usage(&[10.0, 20.0, 30.0]);
        assert!((usage - 20.0).abs() < 1e-6);
    }

    #[test]
    fn collect_returns_error_on_poisoned_mutex() {
        let collector = test_collector();

        // Poison the mutex by panicking while holding the lock guard.
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = collector.sys.lock().expect("not yet poisoned");
            panic!("intentional panic to poison the mutex");
        }));

        let result = collector.collect();
        assert!(result.is_err(), "collect should fail on poisoned mutex");
    }
}
