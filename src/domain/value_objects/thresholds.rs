use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::Status;

/// A warning/critical cutoff pair for a usage-percentage metric.
///
/// Invariant: `warning <= critical`. Enforced when configuration overrides
/// are merged, not on direct construction of default tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub warning: f64,
    pub critical: f64,
}

#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("invalid {category} thresholds: warning ({warning}) exceeds critical ({critical})")]
    Inverted {
        category: &'static str,
        warning: f64,
        critical: f64,
    },
}

/// Optional per-bound override for one category, as read from configuration.
/// Absent bounds keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverride {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
}

impl Threshold {
    #[must_use]
    pub const fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    /// Classifies a usage percentage. Boundary values are inclusive:
    /// `value == critical` is Critical, `value == warning` is Warning.
    #[must_use]
    pub fn classify(&self, value: f64) -> Status {
        if value >= self.critical {
            Status::Critical
        } else if value >= self.warning {
            Status::Warning
        } else {
            Status::Normal
        }
    }

    /// Applies a configuration override field-by-field, then checks the
    /// ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError::Inverted` if the merged pair has
    /// `warning > critical`.
    pub fn merged(
        self,
        overrides: &ThresholdOverride,
        category: &'static str,
    ) -> Result<Self, ThresholdError> {
        let merged = Self {
            warning: overrides.warning.unwrap_or(self.warning),
            critical: overrides.critical.unwrap_or(self.critical),
        };
        if merged.warning > merged.critical {
            return Err(ThresholdError::Inverted {
                category,
                warning: merged.warning,
                critical: merged.critical,
            });
        }
        Ok(merged)
    }
}

/// Thresholds used by the performance analyzer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    pub cpu: Threshold,
    pub memory: Threshold,
    pub disk: Threshold,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            cpu: Threshold::new(80.0, 90.0),
            memory: Threshold::new(75.0, 85.0),
            disk: Threshold::new(80.0, 90.0),
        }
    }
}

/// Thresholds used by the resource analyzer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceThresholds {
    pub disk: Threshold,
    pub memory: Threshold,
    pub swap: Threshold,
}

impl Default for ResourceThresholds {
    fn default() -> Self {
        Self {
            disk: Threshold::new(80.0, 90.0),
            memory: Threshold::new(75.0, 85.0),
            swap: Threshold::new(70.0, 80.0),
        }
    }
}
