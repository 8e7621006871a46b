use serde::Serialize;

use crate::domain::entities::security::ServiceRecord;
use crate::domain::value_objects::Status;

use super::Finding;

/// Legacy cleartext services that should not run on a modern host
const VULNERABLE_SERVICES: [&str; 5] = ["telnet", "ftp", "rsh", "rlogin", "rexec"];

/// A running service matched against the vulnerable set
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedService {
    pub name: String,
    pub state: String,
}

/// Running-service review
#[derive(Debug, Clone, Serialize)]
pub struct ServicesFinding {
    pub total: usize,
    pub vulnerable: Vec<FlaggedService>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for ServicesFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(services: &[ServiceRecord]) -> ServicesFinding {
    let vulnerable: Vec<FlaggedService> = services
        .iter()
        .filter_map(|s| {
            let name = s.name.to_lowercase();
            VULNERABLE_SERVICES
                .contains(&name.as_str())
                .then(|| FlaggedService {
                    name,
                    state: s.state.clone(),
                })
        })
        .collect();

    let (status, issues) = if vulnerable.is_empty() {
        (Status::Normal, Vec::new())
    } else {
        (
            Status::Warning,
            vec![format!(
                "Found {} potentially vulnerable services running",
                vulnerable.len()
            )],
        )
    };

    ServicesFinding {
        total: services.len(),
        vulnerable,
        status,
        issues,
    }
}
