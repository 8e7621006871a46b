pub mod health;
pub mod performance;
pub mod resources;
pub mod security;

pub use health::HealthResult;
pub use performance::{PerformanceAnalysis, PerformanceAnalyzer};
pub use resources::{ResourceAnalysis, ResourceAnalyzer};
pub use security::{SecurityAnalysis, SecurityAnalyzer, SecurityChecks};
