//! Dashboard view model
//!
//! [`Dashboard::render`] runs upstream KRA records through status
//! aggregation, timeline geometry and row grouping, producing a
//! [`DashboardView`] the presentation layer draws directly.

use crate::config::{DashboardConfig, SummaryOrder};
use crate::error::DataQualityIssue;
use crate::model::{Kpi, Kra};
use kra_grouping::{two_level_flags, GroupFlags};
use kra_status::{
    aggregate_progress, aggregate_status, kpi_progress, KpiStatus, StatusBreakdown, PRECEDENCE,
};
use kra_timeline::{
    bucket_labels, today_marker, BarGeometry, Clock, SystemClock, ViewGranularity,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status badge and progress bar for one KRA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KraSummary {
    /// KRA id
    pub kra_id: Uuid,
    /// KRA title
    pub title: String,
    /// Objective label
    pub objective: String,
    /// Aggregate status
    pub status: KpiStatus,
    /// Aggregate progress in percent
    pub progress: u8,
    /// Number of KPIs
    pub kpi_count: usize,
    /// Per-status KPI counts
    pub breakdown: StatusBreakdown,
}

/// One KPI row of the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    /// Owning KRA
    pub kra_id: Uuid,
    /// KPI id
    pub kpi_id: Uuid,
    /// Objective label
    pub objective: String,
    /// KRA title
    pub title: String,
    /// KPI name
    pub kpi_name: String,
    /// KPI status, `not-started` when unrecognized
    pub status: KpiStatus,
    /// KPI progress in percent
    pub progress: u8,
    /// Bar placement, `None` without a readable start date
    pub bar: Option<BarGeometry>,
    /// Header flags
    pub flags: GroupFlags,
}

/// Everything needed to draw the KRA dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Zoom level used for geometry
    pub granularity: ViewGranularity,
    /// Column headers
    pub buckets: Vec<String>,
    /// Position of the today line
    pub today_marker: f64,
    /// One card per KRA
    pub summaries: Vec<KraSummary>,
    /// One row per KPI, in input order
    pub rows: Vec<TimelineRow>,
    /// KPI status counts across all KRAs
    pub breakdown: StatusBreakdown,
    /// Progress across all KPIs
    pub overall_progress: u8,
    /// Data quality findings
    pub issues: Vec<DataQualityIssue>,
}

/// Renders KRA records into a [`DashboardView`]
#[derive(Debug, Clone)]
pub struct Dashboard<C: Clock = SystemClock> {
    config: DashboardConfig,
    clock: C,
}

impl Dashboard<SystemClock> {
    /// Create a dashboard using the wall clock
    #[inline]
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Dashboard<C> {
    /// Create a dashboard with an explicit clock
    #[inline]
    #[must_use]
    pub fn with_clock(config: DashboardConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render with the configured granularity
    #[must_use]
    pub fn render(&self, kras: &[Kra]) -> DashboardView {
        self.render_at(kras, self.config.granularity)
    }

    /// Render with a granularity override
    #[must_use]
    pub fn render_at(&self, kras: &[Kra], granularity: ViewGranularity) -> DashboardView {
        tracing::debug!("rendering {} KRAs at {} granularity", kras.len(), granularity);

        let mut summaries: Vec<KraSummary> = kras.iter().map(summarize).collect();
        self.order_summaries(&mut summaries);

        let rows = self.timeline_rows(kras, granularity);

        let all_kpis: Vec<&Kpi> = kras.iter().flat_map(|kra| kra.kpis.iter()).collect();
        let breakdown = StatusBreakdown::from_children(&all_kpis);
        let overall_progress = aggregate_progress(&all_kpis);

        let issues = if self.config.report_issues {
            let issues: Vec<DataQualityIssue> =
                all_kpis.iter().flat_map(|kpi| kpi.issues()).collect();
            for issue in &issues {
                tracing::warn!("data quality: {}", issue);
            }
            issues
        } else {
            Vec::new()
        };

        tracing::info!(
            "rendered {} KRAs, {} timeline rows, {} issues",
            summaries.len(),
            rows.len(),
            issues.len()
        );

        DashboardView {
            granularity,
            buckets: bucket_labels(granularity),
            today_marker: today_marker(&self.clock, granularity),
            summaries,
            rows,
            breakdown,
            overall_progress,
            issues,
        }
    }

    fn timeline_rows(&self, kras: &[Kra], granularity: ViewGranularity) -> Vec<TimelineRow> {
        let sources: Vec<(&Kra, &Kpi)> = kras
            .iter()
            .flat_map(|kra| kra.kpis.iter().map(move |kpi| (kra, kpi)))
            .collect();

        let flags = if self.config.repeat_headers {
            vec![
                GroupFlags {
                    first_in_group: true,
                    first_in_subgroup: true,
                };
                sources.len()
            ]
        } else {
            let indexed: Vec<(usize, &Kra)> =
                sources.iter().enumerate().map(|(row, (kra, _))| (row, *kra)).collect();
            two_level_flags(
                &indexed,
                |(_, kra)| kra.objective_id,
                |(_, kra)| (kra.objective_id, kra.title.clone()),
                |(row, _)| *row,
            )
        };

        sources
            .into_iter()
            .zip(flags)
            .map(|((kra, kpi), flags)| TimelineRow {
                kra_id: kra.id,
                kpi_id: kpi.id,
                objective: kra.objective_label(),
                title: kra.title.clone(),
                kpi_name: kpi.name.clone(),
                status: kpi.parsed_status().unwrap_or(KpiStatus::NotStarted),
                progress: kpi_progress(kpi),
                bar: kpi.span().map(|span| span.geometry(granularity)),
                flags,
            })
            .collect()
    }

    fn order_summaries(&self, summaries: &mut [KraSummary]) {
        match self.config.summary_order {
            SummaryOrder::Input => {}
            SummaryOrder::Progress => summaries.sort_by_key(|s| s.progress),
            SummaryOrder::Severity => summaries.sort_by_key(|s| severity_rank(s.status)),
        }
    }
}

fn summarize(kra: &Kra) -> KraSummary {
    KraSummary {
        kra_id: kra.id,
        title: kra.title.clone(),
        objective: kra.objective_label(),
        status: aggregate_status(&kra.kpis),
        progress: aggregate_progress(&kra.kpis),
        kpi_count: kra.kpis.len(),
        breakdown: StatusBreakdown::from_children(&kra.kpis),
    }
}

/// Lower is worse; follows the aggregation precedence, then completed, then
/// not-started
fn severity_rank(status: KpiStatus) -> usize {
    PRECEDENCE
        .iter()
        .position(|s| *s == status)
        .unwrap_or(match status {
            KpiStatus::Completed => PRECEDENCE.len(),
            _ => PRECEDENCE.len() + 1,
        })
}
