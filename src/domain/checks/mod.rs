pub mod antivirus;
pub mod cpu;
pub mod disk;
pub mod filesystem;
pub mod firewall;
pub mod memory;
pub mod network;
pub mod ports;
pub mod processes;
pub mod services;
pub mod ssl;
pub mod swap;
pub mod updates;

use crate::domain::value_objects::Status;

/// Common surface of every category finding: the classification plus the
/// human-readable issues produced while checks ran, in check order.
/// Findings are plain data; evaluators are pure functions with no I/O.
pub trait Finding {
    fn status(&self) -> Status;
    fn issues(&self) -> &[String];
}
