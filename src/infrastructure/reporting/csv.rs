use crate::domain::entities::report::AnalysisReport;

use super::{category_rows, health_rows};

/// Renders the report as CSV: one row per category check, then one summary
/// row per domain. Issues within a row are joined with "; ".
#[must_use]
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::from("domain,category,status,issues\n");

    for row in category_rows(report) {
        out.push_str(&format!(
            "{domain},{category},{status},{issues}\n",
            domain = row.domain,
            category = row.category,
            status = row.status,
            issues = quote(&row.issues.join("; ")),
        ));
    }

    for row in health_rows(report) {
        out.push_str(&format!(
            "{domain},health,{status},{score}\n",
            domain = row.domain,
            status = row.status,
            score = quote(&format!("score: {score}", score = row.score)),
        ));
    }

    out
}

/// Quotes a field when it contains a delimiter, doubling embedded quotes.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_report;
    use super::*;

    #[test]
    fn header_comes_first() {
        let rendered = render(&sample_report());
        let first = rendered.lines().next();
        assert_eq!(first, Some("domain,category,status,issues"));
    }

    #[test]
    fn every_category_and_domain_has_a_row() {
        let rendered = render(&sample_report());
        // 16 category rows + 3 health rows + header.
        assert_eq!(rendered.lines().count(), 20);
        assert!(rendered.contains("performance,cpu,critical,"));
        assert!(rendered.contains("security,health,"));
    }

    #[test]
    fn issue_text_with_commas_is_quoted() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a, b"), "\"a, b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn critical_cpu_issue_appears_in_row() {
        let rendered = render(&sample_report());
        let cpu_line = rendered
            .lines()
            .find(|l| l.starts_with("performance,cpu"))
            .unwrap_or("");
        assert!(cpu_line.contains("critically high"));
    }
}
