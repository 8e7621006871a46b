use colored::Colorize;
use tracing::info;

use crate::application::config::AppConfig;
use crate::domain::analyzers::{
    HealthResult, PerformanceAnalyzer, ResourceAnalyzer, SecurityAnalyzer,
};
use crate::domain::entities::report::AnalysisReport;
use crate::domain::ports::collector::MetricsSource;
use crate::domain::ports::sink::ReportSink;
use crate::domain::value_objects::HealthStatus;

/// Runs the full diagnostic: collect one snapshot, analyze every enabled
/// domain, write the report and print a terminal summary.
///
/// # Errors
///
/// Returns an error if collection fails, a threshold override is invalid,
/// or the report cannot be written.
pub fn run_diagnose(
    source: &dyn MetricsSource,
    sink: &dyn ReportSink,
    config: &AppConfig,
) -> anyhow::Result<()> {
    info!("collecting metrics snapshot");
    let snapshot = source.collect()?;

    let performance = config
        .analysis
        .performance
        .enabled
        .then(|| -> anyhow::Result<_> {
            let analyzer = PerformanceAnalyzer::new(config.performance_thresholds()?);
            Ok(analyzer.analyze(&snapshot))
        })
        .transpose()?;

    let security = config.analysis.security.enabled.then(|| {
        SecurityAnalyzer::new(config.analysis.security.checks).analyze(&snapshot)
    });

    let resources = config
        .analysis
        .resources
        .enabled
        .then(|| -> anyhow::Result<_> {
            let analyzer = ResourceAnalyzer::new(config.resource_thresholds()?);
            Ok(analyzer.analyze(&snapshot))
        })
        .transpose()?;

    let report = AnalysisReport {
        generated_at: snapshot.timestamp,
        system: snapshot.system.clone(),
        performance,
        security,
        resources,
    };

    let paths = sink.write(&report)?;

    print_summary(&report);
    for path in &paths {
        println!("Report written to {}", path.display().to_string().bold());
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!("{}", "Diagnostic summary".bold());
    println!(
        "Host: {hostname} ({platform} {version})",
        hostname = report.system.hostname,
        platform = report.system.platform,
        version = report.system.platform_version,
    );

    if let Some(p) = &report.performance {
        print_domain("performance", &p.health);
    }
    if let Some(s) = &report.security {
        print_domain("security", &s.health);
    }
    if let Some(r) = &report.resources {
        print_domain("resources", &r.health);
    }
}

fn print_domain(name: &str, health: &HealthResult) {
    let status = match health.status {
        HealthStatus::Healthy => health.status.to_string().green(),
        HealthStatus::Warning => health.status.to_string().yellow(),
        HealthStatus::Critical => health.status.to_string().red().bold(),
    };
    println!(
        "  {name:<12} {status} (score {score})",
        score = health.score
    );
    for issue in &health.issues {
        println!("    - {issue}");
    }
}
