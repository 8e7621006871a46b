use serde::Serialize;

use crate::domain::entities::security::FirewallMetrics;
use crate::domain::value_objects::Status;

use super::Finding;

/// Firewall state. A disabled firewall goes straight to Critical; it is the
/// single largest exposure a host can have.
#[derive(Debug, Clone, Serialize)]
pub struct FirewallFinding {
    pub enabled: bool,
    pub rules: Vec<String>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for FirewallFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(firewall: &FirewallMetrics) -> FirewallFinding {
    let (status, issues) = if firewall.enabled {
        (Status::Normal, Vec::new())
    } else {
        (
            Status::Critical,
            vec!["Firewall is not enabled".to_string()],
        )
    };

    FirewallFinding {
        enabled: firewall.enabled,
        rules: firewall.rules.clone(),
        status,
        issues,
    }
}
