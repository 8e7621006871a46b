use serde::Serialize;

use crate::domain::entities::security::OpenPort;
use crate::domain::value_objects::Status;

use super::Finding;

/// Ports with a history of exposure when reachable from untrusted networks.
/// Matching is by port number only; the listener state is carried through
/// for the report but does not affect classification.
const VULNERABLE_PORTS: [(u16, &str); 5] = [
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (3389, "RDP"),
];

fn vulnerable_service(port: u16) -> Option<&'static str> {
    VULNERABLE_PORTS
        .iter()
        .find(|(p, _)| *p == port)
        .map(|(_, service)| *service)
}

/// An open port matched against the vulnerable set
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedPort {
    pub port: u16,
    pub service: &'static str,
    pub state: String,
}

/// Open-port review: total listeners plus any in the vulnerable set
#[derive(Debug, Clone, Serialize)]
pub struct PortsFinding {
    pub total: usize,
    pub open: Vec<FlaggedPort>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for PortsFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(ports: &[OpenPort]) -> PortsFinding {
    let open: Vec<FlaggedPort> = ports
        .iter()
        .filter_map(|p| {
            vulnerable_service(p.port).map(|service| FlaggedPort {
                port: p.port,
                service,
                state: p.state.clone(),
            })
        })
        .collect();

    let (status, issues) = if open.is_empty() {
        (Status::Normal, Vec::new())
    } else {
        (
            Status::Warning,
            vec![format!(
                "Found {} potentially vulnerable ports open",
                open.len()
            )],
        )
    };

    PortsFinding {
        total: ports.len(),
        open,
        status,
        issues,
    }
}
