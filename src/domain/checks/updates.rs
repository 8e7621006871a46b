use serde::Serialize;

use crate::domain::entities::security::UpdateMetrics;
use crate::domain::value_objects::Status;

use super::Finding;

/// Pending-update review
#[derive(Debug, Clone, Serialize)]
pub struct UpdatesFinding {
    pub updates_available: u32,
    pub last_update: Option<String>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for UpdatesFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(updates: &UpdateMetrics) -> UpdatesFinding {
    let (status, issues) = if updates.updates_available > 0 {
        (
            Status::Warning,
            vec![format!(
                "System has {} updates available",
                updates.updates_available
            )],
        )
    } else {
        (Status::Normal, Vec::new())
    };

    UpdatesFinding {
        updates_available: updates.updates_available,
        last_update: updates.last_update.clone(),
        status,
        issues,
    }
}
