use serde::Serialize;

use crate::domain::entities::security::SslCertificate;
use crate::domain::value_objects::Status;

use super::Finding;

/// Certificate expiry review. An expired certificate is Critical and takes
/// precedence over expiring-soon warnings, even when both sets are non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct SslFinding {
    pub total: usize,
    pub expired: Vec<SslCertificate>,
    pub expiring_soon: Vec<SslCertificate>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for SslFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(certificates: &[SslCertificate]) -> SslFinding {
    let mut expired = Vec::new();
    let mut expiring_soon = Vec::new();
    for cert in certificates {
        if cert.expired {
            expired.push(cert.clone());
        } else if cert.expiring_soon {
            expiring_soon.push(cert.clone());
        }
    }

    let (status, issues) = if expired.is_empty() {
        if expiring_soon.is_empty() {
            (Status::Normal, Vec::new())
        } else {
            (
                Status::Warning,
                vec![format!(
                    "Found {} SSL certificates expiring soon",
                    expiring_soon.len()
                )],
            )
        }
    } else {
        (
            Status::Critical,
            vec![format!("Found {} expired SSL certificates", expired.len())],
        )
    };

    SslFinding {
        total: certificates.len(),
        expired,
        expiring_soon,
        status,
        issues,
    }
}
