pub mod fs_walker;
pub mod security_probe;
pub mod sysinfo_collector;

pub use sysinfo_collector::SysinfoCollector;
