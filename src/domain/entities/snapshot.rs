use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::disk::DiskMetrics;
use super::filesystem::FileSystemMetrics;
use super::process::ProcessRecord;
use super::security::{
    AntivirusMetrics, FirewallMetrics, OpenPort, ServiceRecord, SslCertificate, UpdateMetrics,
};

/// Complete metrics snapshot captured at one instant.
///
/// Every category defaults to an empty structure, so a partial snapshot
/// (a collector that could not probe some category, or a trimmed fixture)
/// deserializes cleanly and evaluators degrade gracefully instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub system: SystemInfo,
    #[serde(default)]
    pub cpu: CpuMetrics,
    #[serde(default)]
    pub memory: MemoryMetrics,
    #[serde(default)]
    pub swap: SwapMetrics,
    #[serde(default)]
    pub disk: DiskMetrics,
    #[serde(default)]
    pub network: NetworkMetrics,
    #[serde(default)]
    pub processes: Vec<ProcessRecord>,
    #[serde(default)]
    pub file_system: FileSystemMetrics,
    #[serde(default)]
    pub ports: Vec<OpenPort>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub updates: UpdateMetrics,
    #[serde(default)]
    pub firewall: FirewallMetrics,
    #[serde(default)]
    pub antivirus: AntivirusMetrics,
    #[serde(default)]
    pub ssl: Vec<SslCertificate>,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            system: SystemInfo::default(),
            cpu: CpuMetrics::default(),
            memory: MemoryMetrics::default(),
            swap: SwapMetrics::default(),
            disk: DiskMetrics::default(),
            network: NetworkMetrics::default(),
            processes: Vec::new(),
            file_system: FileSystemMetrics::default(),
            ports: Vec::new(),
            services: Vec::new(),
            updates: UpdateMetrics::default(),
            firewall: FirewallMetrics::default(),
            antivirus: AntivirusMetrics::default(),
            ssl: Vec::new(),
        }
    }
}

/// Basic host identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub platform_version: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub boot_time: Option<DateTime<Utc>>,
}

/// Aggregate CPU usage and load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Global usage percentage across all cores
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub core_count: usize,
    #[serde(default)]
    pub frequency_mhz: Option<u64>,
    #[serde(default)]
    pub load_avg_1m: f64,
    #[serde(default)]
    pub load_avg_5m: f64,
    #[serde(default)]
    pub load_avg_15m: f64,
}

/// Virtual memory usage, byte counts plus usage percentage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub available: u64,
}

/// Swap usage, byte counts plus usage percentage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapMetrics {
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub free: u64,
}

/// Raw network I/O counters since boot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    #[serde(default)]
    pub bytes_sent: u64,
    #[serde(default)]
    pub bytes_recv: u64,
    #[serde(default)]
    pub packets_sent: u64,
    #[serde(default)]
    pub packets_recv: u64,
    #[serde(default)]
    pub errors_in: u64,
    #[serde(default)]
    pub errors_out: u64,
}
