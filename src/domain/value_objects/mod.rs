pub mod status;
pub mod thresholds;

pub use status::{HealthStatus, Status};
pub use thresholds::{
    PerformanceThresholds, ResourceThresholds, Threshold, ThresholdError, ThresholdOverride,
};
