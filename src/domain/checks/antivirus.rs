use serde::Serialize;

use crate::domain::entities::security::AntivirusMetrics;
use crate::domain::value_objects::Status;

use super::Finding;

/// Antivirus state; disabled goes straight to Critical, like the firewall
#[derive(Debug, Clone, Serialize)]
pub struct AntivirusFinding {
    pub enabled: bool,
    pub last_scan: Option<String>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for AntivirusFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(antivirus: &AntivirusMetrics) -> AntivirusFinding {
    let (status, issues) = if antivirus.enabled {
        (Status::Normal, Vec::new())
    } else {
        (
            Status::Critical,
            vec!["Antivirus is not enabled".to_string()],
        )
    };

    AntivirusFinding {
        enabled: antivirus.enabled,
        last_scan: antivirus.last_scan.clone(),
        status,
        issues,
    }
}
