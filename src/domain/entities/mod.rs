pub mod disk;
pub mod filesystem;
pub mod process;
pub mod report;
pub mod security;
pub mod snapshot;

pub use disk::{DiskMetrics, DiskPartition};
pub use filesystem::{FileEntry, FileSystemMetrics};
pub use process::{ProcessRecord, ProcessState};
pub use report::AnalysisReport;
pub use security::{
    AntivirusMetrics, FirewallMetrics, OpenPort, ServiceRecord, SslCertificate, UpdateMetrics,
};
pub use snapshot::{
    CpuMetrics, MemoryMetrics, MetricsSnapshot, NetworkMetrics, SwapMetrics, SystemInfo,
};
