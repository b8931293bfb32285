//! Plain-text rendering of a [`DashboardView`]

use crate::dashboard::{DashboardView, TimelineRow};

const TRACK_COLUMNS: usize = 50;

/// Render the dashboard as a fixed-width text report
#[must_use]
pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "KRA Dashboard ({}), overall progress {}%\n\n",
        view.granularity, view.overall_progress
    ));

    out.push_str("Summaries\n");
    for summary in &view.summaries {
        out.push_str(&format!(
            "  {:<12} {:>3}%  {} ({} KPIs)\n",
            summary.status.label(),
            summary.progress,
            summary.title,
            summary.kpi_count
        ));
    }

    out.push_str(&format!("\nTimeline  [{}]\n", view.buckets.join(" ")));
    for row in &view.rows {
        out.push_str(&timeline_row(row, view.today_marker));
    }

    if !view.issues.is_empty() {
        out.push_str(&format!("\nData quality ({} issues)\n", view.issues.len()));
        for issue in &view.issues {
            out.push_str(&format!("  - {issue}\n"));
        }
    }

    out
}

fn timeline_row(row: &TimelineRow, today: f64) -> String {
    let mut text = String::new();
    if row.flags.first_in_group {
        text.push_str(&format!("  {}\n", row.objective));
    }
    if row.flags.first_in_subgroup {
        text.push_str(&format!("    {}\n", row.title));
    }

    let track = row.bar.map_or_else(
        || " ".repeat(TRACK_COLUMNS),
        |bar| draw_track(bar.left, bar.width, today),
    );
    text.push_str(&format!(
        "      {:<24} |{}| {:>3}% {}\n",
        truncate(&row.kpi_name, 24),
        track,
        row.progress,
        row.status
    ));
    text
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn column(percent: f64) -> usize {
    let col = (percent / 100.0 * TRACK_COLUMNS as f64).round();
    (col.max(0.0) as usize).min(TRACK_COLUMNS)
}

fn draw_track(left: f64, width: f64, today: f64) -> String {
    let start = column(left).min(TRACK_COLUMNS - 1);
    let end = column(left + width).clamp(start + 1, TRACK_COLUMNS);
    let today = column(today).min(TRACK_COLUMNS - 1);

    (0..TRACK_COLUMNS)
        .map(|col| {
            if (start..end).contains(&col) {
                '#'
            } else if col == today {
                ':'
            } else {
                '.'
            }
        })
        .collect()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
