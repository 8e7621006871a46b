use thiserror::Error;

use crate::domain::entities::snapshot::MetricsSnapshot;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to collect system metrics: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

/// Source of one metrics snapshot per invocation.
///
/// Probes are expected to degrade gracefully: a category that cannot be
/// collected is returned as its empty default, not as an error. Errors are
/// reserved for total collection failure.
pub trait MetricsSource: Send + Sync {
    /// Capture a full metrics snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if system metrics are entirely unavailable
    /// or access is denied.
    fn collect(&self) -> Result<MetricsSnapshot, CollectionError>;
}
