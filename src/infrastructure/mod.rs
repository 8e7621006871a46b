pub mod collectors;
pub mod reporting;
