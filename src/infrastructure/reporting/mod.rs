pub(crate) mod charts;
pub mod csv;
pub mod html;
pub mod json;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::domain::checks::Finding;
use crate::domain::entities::report::AnalysisReport;
use crate::domain::ports::sink::{ReportError, ReportSink};
use crate::domain::value_objects::{HealthStatus, Status};

/// Supported report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Json,
    Csv,
}

impl ReportFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Writes reports as timestamped files in a configured directory.
pub struct FileReportSink {
    output_dir: PathBuf,
    format: ReportFormat,
    charts: bool,
}

impl FileReportSink {
    #[must_use]
    pub fn new(output_dir: &Path, format: ReportFormat, charts: bool) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            format,
            charts,
        }
    }

    fn output_path(&self, report: &AnalysisReport) -> PathBuf {
        let stamp = report.generated_at.format("%Y%m%d_%H%M%S");
        self.output_dir
            .join(format!("report_{stamp}.{ext}", ext = self.format.extension()))
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>, ReportError> {
        std::fs::create_dir_all(&self.output_dir)?;

        let content = match self.format {
            ReportFormat::Html => html::render(report, self.charts),
            ReportFormat::Json => json::render(report)?,
            ReportFormat::Csv => csv::render(report),
        };

        let path = self.output_path(report);
        std::fs::write(&path, content)?;
        info!("report written to {path}", path = path.display());
        Ok(vec![path])
    }
}

/// One category check flattened for tabular rendering.
pub(crate) struct CategoryRow {
    pub domain: &'static str,
    pub category: &'static str,
    pub status: Status,
    pub issues: Vec<String>,
}

/// One domain's aggregated health flattened for tabular rendering.
pub(crate) struct HealthRow {
    pub domain: &'static str,
    pub score: i32,
    pub status: HealthStatus,
}

fn push_row(
    rows: &mut Vec<CategoryRow>,
    domain: &'static str,
    category: &'static str,
    finding: &dyn Finding,
) {
    rows.push(CategoryRow {
        domain,
        category,
        status: finding.status(),
        issues: finding.issues().to_vec(),
    });
}

/// Flattens every present category finding in fixed domain and category order.
pub(crate) fn category_rows(report: &AnalysisReport) -> Vec<CategoryRow> {
    let mut rows = Vec::new();

    if let Some(p) = &report.performance {
        push_row(&mut rows, "performance", "cpu", &p.cpu);
        push_row(&mut rows, "performance", "memory", &p.memory);
        push_row(&mut rows, "performance", "disk", &p.disk);
        push_row(&mut rows, "performance", "network", &p.network);
        push_row(&mut rows, "performance", "processes", &p.processes);
    }
    if let Some(s) = &report.security {
        if let Some(f) = &s.ports {
            push_row(&mut rows, "security", "open_ports", f);
        }
        if let Some(f) = &s.services {
            push_row(&mut rows, "security", "running_services", f);
        }
        if let Some(f) = &s.updates {
            push_row(&mut rows, "security", "system_updates", f);
        }
        if let Some(f) = &s.firewall {
            push_row(&mut rows, "security", "firewall_status", f);
        }
        if let Some(f) = &s.antivirus {
            push_row(&mut rows, "security", "antivirus_status", f);
        }
        if let Some(f) = &s.ssl {
            push_row(&mut rows, "security", "ssl_certificates", f);
        }
    }
    if let Some(r) = &report.resources {
        push_row(&mut rows, "resources", "disk", &r.disk);
        push_row(&mut rows, "resources", "memory", &r.memory);
        push_row(&mut rows, "resources", "swap", &r.swap);
        push_row(&mut rows, "resources", "file_system", &r.file_system);
        push_row(&mut rows, "resources", "processes", &r.processes);
    }

    rows
}

/// Flattens per-domain health, skipping disabled domains.
pub(crate) fn health_rows(report: &AnalysisReport) -> Vec<HealthRow> {
    let mut rows = Vec::new();
    if let Some(p) = &report.performance {
        rows.push(HealthRow {
            domain: "performance",
            score: p.health.score,
            status: p.health.status,
        });
    }
    if let Some(s) = &report.security {
        rows.push(HealthRow {
            domain: "security",
            score: s.health.score,
            status: s.health.status,
        });
    }
    if let Some(r) = &report.resources {
        rows.push(HealthRow {
            domain: "resources",
            score: r.health.score,
            status: r.health.status,
        });
    }
    rows
}

#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) mod test_support {
    use chrono::Utc;

    use crate::domain::analyzers::{PerformanceAnalyzer, ResourceAnalyzer, SecurityAnalyzer};
    use crate::domain::entities::report::AnalysisReport;
    use crate::domain::entities::security::FirewallMetrics;
    use crate::domain::entities::snapshot::{CpuMetrics, MetricsSnapshot, SystemInfo};

    /// A report with one critical CPU finding and one critical antivirus
    /// finding, enough to exercise issue rendering in every format.
    pub fn sample_report() -> AnalysisReport {
        let snapshot = MetricsSnapshot {
            cpu: CpuMetrics {
                usage: 95.0,
                core_count: 4,
                ..CpuMetrics::default()
            },
            firewall: FirewallMetrics {
                enabled: true,
                rules: vec![],
            },
            ..MetricsSnapshot::default()
        };
        AnalysisReport {
            generated_at: Utc::now(),
            system: SystemInfo {
                hostname: "testhost".to_string(),
                platform: "Linux".to_string(),
                platform_version: "6.1".to_string(),
                architecture: "x86_64".to_string(),
                boot_time: None,
            },
            performance: Some(PerformanceAnalyzer::default().analyze(&snapshot)),
            security: Some(SecurityAnalyzer::default().analyze(&snapshot)),
            resources: Some(ResourceAnalyzer::default().analyze(&snapshot)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::test_support::sample_report;
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!(
            "HTML".parse::<ReportFormat>().expect("parse"),
            ReportFormat::Html
        );
        assert_eq!(
            "json".parse::<ReportFormat>().expect("parse"),
            ReportFormat::Json
        );
        assert_eq!(
            "Csv".parse::<ReportFormat>().expect("parse"),
            ReportFormat::Csv
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "pdf".parse::<ReportFormat>().expect_err("must fail");
        assert!(matches!(err, ReportError::UnsupportedFormat(f) if f == "pdf"));
    }

    #[test]
    fn category_rows_follow_domain_order() {
        let report = sample_report();
        let rows = category_rows(&report);
        assert_eq!(rows.len(), 5 + 6 + 5);
        assert_eq!(rows[0].domain, "performance");
        assert_eq!(rows[0].category, "cpu");
        assert_eq!(rows[5].domain, "security");
        assert_eq!(rows.last().expect("rows").category, "processes");
    }

    #[test]
    fn disabled_domains_produce_no_rows() {
        let mut report = sample_report();
        report.security = None;
        report.resources = None;
        let rows = category_rows(&report);
        assert!(rows.iter().all(|r| r.domain == "performance"));
        assert_eq!(health_rows(&report).len(), 1);
    }

    #[test]
    fn sink_writes_one_timestamped_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FileReportSink::new(dir.path(), ReportFormat::Json, false);
        let paths = sink.write(&sample_report()).expect("write report");

        assert_eq!(paths.len(), 1);
        let name = paths[0]
            .file_name()
            .expect("file name")
            .to_string_lossy()
            .to_string();
        assert!(name.starts_with("report_"));
        assert!(name.ends_with(".json"));
        assert!(paths[0].exists());
    }

    #[test]
    fn sink_creates_missing_output_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("deep").join("reports");
        let sink = FileReportSink::new(&nested, ReportFormat::Csv, false);
        let paths = sink.write(&sample_report()).expect("write report");
        assert!(paths[0].starts_with(&nested));
    }
}
