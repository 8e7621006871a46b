pub mod collector;
pub mod sink;

pub use collector::{CollectionError, MetricsSource};
pub use sink::{ReportError, ReportSink};
