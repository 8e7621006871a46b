use crate::domain::entities::report::AnalysisReport;

use super::{category_rows, charts, health_rows};

/// Renders the report as a self-contained HTML page: host summary, the
/// per-domain health banner (with an optional score chart), and one table
/// row per category check.
#[must_use]
pub fn render(report: &AnalysisReport, charts_enabled: bool) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h1>System Diagnostic Report</h1>\n\
         <p class=\"meta\">Generated {generated} for <strong>{hostname}</strong> \
         ({platform} {version}, {arch})</p>\n",
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        hostname = escape(&report.system.hostname),
        platform = escape(&report.system.platform),
        version = escape(&report.system.platform_version),
        arch = escape(&report.system.architecture),
    ));

    let health = health_rows(report);

    body.push_str("<h2>Health</h2>\n");
    if charts_enabled {
        body.push_str(&charts::health_score_chart(&health));
    }
    body.push_str("<table>\n<tr><th>Domain</th><th>Score</th><th>Status</th></tr>\n");
    for row in &health {
        body.push_str(&format!(
            "<tr><td>{domain}</td><td>{score}</td>\
             <td class=\"{status}\">{status}</td></tr>\n",
            domain = row.domain,
            score = row.score,
            status = row.status,
        ));
    }
    body.push_str("</table>\n");

    if charts_enabled {
        if let Some(p) = &report.performance {
            body.push_str("<h2>Usage</h2>\n");
            body.push_str(&charts::disk_usage_chart(&p.disk));
            if !p.processes.high_cpu.is_empty() {
                body.push_str(&charts::top_cpu_chart(&p.processes));
            }
        }
    }

    body.push_str("<h2>Checks</h2>\n");
    body.push_str(
        "<table>\n<tr><th>Domain</th><th>Category</th><th>Status</th><th>Issues</th></tr>\n",
    );
    for row in category_rows(report) {
        let issues = if row.issues.is_empty() {
            "-".to_string()
        } else {
            row.issues
                .iter()
                .map(|i| escape(i))
                .collect::<Vec<_>>()
                .join("<br>")
        };
        body.push_str(&format!(
            "<tr><td>{domain}</td><td>{category}</td>\
             <td class=\"{status}\">{status}</td><td>{issues}</td></tr>\n",
            domain = row.domain,
            category = row.category,
            status = row.status,
        ));
    }
    body.push_str("</table>\n");

    page(&report.system.hostname, &body)
}

fn page(hostname: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Diagnostic report - {title}</title>\n<style>\n{STYLE}</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n",
        title = escape(hostname),
    )
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; color: #263238; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border: 1px solid #cfd8dc; padding: 0.4rem 0.8rem; text-align: left; }
th { background: #eceff1; }
.meta { color: #607d8b; }
.normal, .healthy { color: #2e7d32; }
.warning { color: #f9a825; }
.critical { color: #c62828; font-weight: bold; }
.chart { margin-bottom: 1rem; }
";

/// Minimal HTML escaping for text nodes and attribute values.
pub(super) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
