use serde::{Deserialize, Serialize};

use crate::domain::checks::Finding;
use crate::domain::value_objects::{HealthStatus, Status};

const CRITICAL_PENALTY: i32 = 25;
const WARNING_PENALTY: i32 = 10;
const CRITICAL_FLOOR: i32 = 50;
const WARNING_FLOOR: i32 = 75;

/// Aggregated health of one analysis domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResult {
    /// Starts at 100; deliberately not clamped below 0, since the magnitude of a
    /// negative score conveys how many categories are simultaneously critical.
    pub score: i32,
    pub status: HealthStatus,
    pub issues: Vec<String>,
}

/// Reduces a domain's category findings into one health result.
///
/// Each Critical finding costs 25 points, each Warning 10; issues are
/// concatenated in iteration order, so callers must pass findings in their
/// domain's fixed category order to keep reports deterministic.
#[must_use]
pub fn aggregate<'a, I>(findings: I) -> HealthResult
where
    I: IntoIterator<Item = &'a dyn Finding>,
{
    let mut score = 100;
    let mut issues = Vec::new();

    for finding in findings {
        match finding.status() {
            Status::Critical => {
                score -= CRITICAL_PENALTY;
                issues.extend_from_slice(finding.issues());
            }
            Status::Warning => {
                score -= WARNING_PENALTY;
                issues.extend_from_slice(finding.issues());
            }
            Status::Normal => {}
        }
    }

    let status = if score <= CRITICAL_FLOOR {
        HealthStatus::Critical
    } else if score <= WARNING_FLOOR {
        HealthStatus::Warning
    } else {
        HealthStatus::Healthy
    };

    HealthResult {
        score,
        status,
        issues,
    }
}
