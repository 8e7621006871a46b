use serde::{Deserialize, Serialize};

use crate::domain::checks::{antivirus, firewall, ports, services, ssl, updates, Finding};
use crate::domain::entities::snapshot::MetricsSnapshot;

use super::health::{self, HealthResult};

/// Which security checks run. All enabled by default; a disabled check is
/// skipped entirely: absent from the result and from health aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityChecks {
    pub open_ports: bool,
    pub running_services: bool,
    pub system_updates: bool,
    pub firewall_status: bool,
    pub antivirus_status: bool,
    pub ssl_certificates: bool,
}

impl Default for SecurityChecks {
    fn default() -> Self {
        Self {
            open_ports: true,
            running_services: true,
            system_updates: true,
            firewall_status: true,
            antivirus_status: true,
            ssl_certificates: true,
        }
    }
}

/// Security-posture view of one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SecurityAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<ports::PortsFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<services::ServicesFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<updates::UpdatesFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall: Option<firewall::FirewallFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antivirus: Option<antivirus::AntivirusFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<ssl::SslFinding>,
    pub health: HealthResult,
}

/// Analyzes security posture: ports, services, updates, firewall, antivirus
/// and SSL certificates, each individually toggleable.
#[derive(Debug, Clone)]
pub struct SecurityAnalyzer {
    checks: SecurityChecks,
}

impl SecurityAnalyzer {
    #[must_use]
    pub const fn new(checks: SecurityChecks) -> Self {
        Self { checks }
    }

    #[must_use]
    pub fn analyze(&self, snapshot: &MetricsSnapshot) -> SecurityAnalysis {
        let ports = self
            .checks
            .open_ports
            .then(|| ports::evaluate(&snapshot.ports));
        let services = self
            .checks
            .running_services
            .then(|| services::evaluate(&snapshot.services));
        let updates = self
            .checks
            .system_updates
            .then(|| updates::evaluate(&snapshot.updates));
        let firewall = self
            .checks
            .firewall_status
            .then(|| firewall::evaluate(&snapshot.firewall));
        let antivirus = self
            .checks
            .antivirus_status
            .then(|| antivirus::evaluate(&snapshot.antivirus));
        let ssl = self
            .checks
            .ssl_certificates
            .then(|| ssl::evaluate(&snapshot.ssl));

        // Fixed category order; disabled checks simply do not participate.
        let mut findings: Vec<&dyn Finding> = Vec::with_capacity(6);
        if let Some(f) = &ports {
            findings.push(f);
        }
        if let Some(f) = &services {
            findings.push(f);
        }
        if let Some(f) = &updates {
            findings.push(f);
        }
        if let Some(f) = &firewall {
            findings.push(f);
        }
        if let Some(f) = &antivirus {
            findings.push(f);
        }
        if let Some(f) = &ssl {
            findings.push(f);
        }
        let health = health::aggregate(findings);

        SecurityAnalysis {
            ports,
            services,
            updates,
            firewall,
            antivirus,
            ssl,
            health,
        }
    }
}

impl Default for SecurityAnalyzer {
    fn default() -> Self {
        Self::new(SecurityChecks::default())
    }
}
