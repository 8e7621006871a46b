use crate::domain::checks::disk::DiskFinding;
use crate::domain::checks::processes::{ProcessFinding, ProcessRef};
use crate::domain::value_objects::{HealthStatus, Status};

use super::HealthRow;

const BAR_HEIGHT: i32 = 28;
const BAR_GAP: i32 = 12;
const LABEL_WIDTH: i32 = 160;
const BAR_MAX_WIDTH: i32 = 300;
const SVG_WIDTH: i32 = 540;
/// Process bars shown in the top-CPU chart.
const TOP_PROCESS_LIMIT: usize = 5;

const fn health_color(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "#2e7d32",
        HealthStatus::Warning => "#f9a825",
        HealthStatus::Critical => "#c62828",
    }
}

const fn status_color(status: Status) -> &'static str {
    match status {
        Status::Normal => "#2e7d32",
        Status::Warning => "#f9a825",
        Status::Critical => "#c62828",
    }
}

struct Bar {
    label: String,
    /// Bar fill on a 0..=100 scale; out-of-range values are clamped.
    fill: f64,
    color: &'static str,
    value_label: String,
}

/// Renders labelled horizontal bars as one inline SVG.
fn bar_svg(title: &str, bars: &[Bar]) -> String {
    let row_count = i32::try_from(bars.len()).unwrap_or(0);
    let height = row_count * (BAR_HEIGHT + BAR_GAP) + BAR_GAP;

    let mut svg = format!(
        "<svg class=\"chart\" width=\"{SVG_WIDTH}\" height=\"{height}\" \
         viewBox=\"0 0 {SVG_WIDTH} {height}\" xmlns=\"http://www.w3.org/2000/svg\" \
         role=\"img\" aria-label=\"{title}\">\n"
    );

    #[allow(clippy::cast_possible_truncation)]
    for (i, bar) in bars.iter().enumerate() {
        let y = i32::try_from(i).unwrap_or(0) * (BAR_HEIGHT + BAR_GAP) + BAR_GAP;
        let width = ((bar.fill.clamp(0.0, 100.0) / 100.0) * f64::from(BAR_MAX_WIDTH)) as i32;
        let text_y = y + BAR_HEIGHT / 2 + 5;

        svg.push_str(&format!(
            "  <text x=\"0\" y=\"{text_y}\" font-size=\"14\">{label}</text>\n",
            label = super::html::escape(&bar.label),
        ));
        svg.push_str(&format!(
            "  <rect x=\"{LABEL_WIDTH}\" y=\"{y}\" width=\"{BAR_MAX_WIDTH}\" \
             height=\"{BAR_HEIGHT}\" fill=\"#eceff1\"/>\n"
        ));
        svg.push_str(&format!(
            "  <rect x=\"{LABEL_WIDTH}\" y=\"{y}\" width=\"{width}\" \
             height=\"{BAR_HEIGHT}\" fill=\"{color}\"/>\n",
            color = bar.color,
        ));
        svg.push_str(&format!(
            "  <text x=\"{x}\" y=\"{text_y}\" font-size=\"14\">{value}</text>\n",
            x = LABEL_WIDTH + BAR_MAX_WIDTH + 10,
            value = bar.value_label,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Bar chart of per-domain health scores.
///
/// Scores below zero render as an empty bar; the numeric label still shows
/// the real value.
pub fn health_score_chart(rows: &[HealthRow]) -> String {
    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| Bar {
            label: row.domain.to_string(),
            fill: f64::from(row.score.clamp(0, 100)),
            color: health_color(row.status),
            value_label: row.score.to_string(),
        })
        .collect();
    bar_svg("Health scores by domain", &bars)
}

/// Single-bar chart of aggregate disk usage.
pub fn disk_usage_chart(disk: &DiskFinding) -> String {
    let bars = [Bar {
        label: "disk usage".to_string(),
        fill: disk.usage,
        color: status_color(disk.status),
        value_label: format!("{usage:.1}%", usage = disk.usage),
    }];
    bar_svg("Disk usage", &bars)
}

/// Bar chart of the most CPU-hungry processes, up to five, descending.
/// Empty when no process crossed the high-CPU cutoff.
pub fn top_cpu_chart(processes: &ProcessFinding) -> String {
    let mut top: Vec<&ProcessRef> = processes.high_cpu.iter().collect();
    top.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top.truncate(TOP_PROCESS_LIMIT);

    let bars: Vec<Bar> = top
        .iter()
        .map(|p| Bar {
            label: format!("{name} ({pid})", name = p.name, pid = p.pid),
            fill: p.cpu_percent,
            color: "#1565c0",
            value_label: format!("{cpu:.1}%", cpu = p.cpu_percent),
        })
        .collect();
    bar_svg("Top CPU processes", &bars)
}
