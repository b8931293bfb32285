//! KRA Status Aggregation
//!
//! Derives a parent KRA's status badge and progress bar from its KPIs.
//!
//! # Core Concepts
//!
//! - [`KpiStatus`]: Closed set of status values with tolerant parsing
//! - [`aggregate_status`]: Pessimistic precedence over child statuses
//! - [`aggregate_progress`]: Capped `actual / target` ratio in percent
//! - [`Coerced`]: Result of best-effort numeric coercion of upstream fields
//! - [`StatusBreakdown`]: Per-status counts backing the aggregate
//!
//! # Example
//!
//! ```rust,ignore
//! use kra_status::{aggregate_progress, aggregate_status, KpiStatus, Measure};
//!
//! let status = aggregate_status(&[KpiStatus::OnTrack, KpiStatus::AtRisk]);
//! assert_eq!(status, KpiStatus::AtRisk);
//!
//! let progress = aggregate_progress(&[Measure::new(100.0, 40.0), Measure::new(50.0, 50.0)]);
//! assert_eq!(progress, 60);
//! ```

mod aggregate;
mod coerce;
mod status;

pub use aggregate::{
    aggregate_progress, aggregate_status, kpi_progress, progress_ratio, HasMeasures, HasStatus,
    Measure, StatusBreakdown, PRECEDENCE,
};
pub use coerce::{coerce_numeric, Coerced, RawNumber};
pub use status::{KpiStatus, StatusError, StatusTone};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn kra_with_mixed_kpis() {
        let statuses = [KpiStatus::OnTrack, KpiStatus::Completed];
        let measures = [Measure::new(100.0, 40.0), Measure::new(50.0, 50.0)];

        assert_eq!(aggregate_status(&statuses), KpiStatus::OnTrack);
        assert_eq!(aggregate_progress(&measures), 60);
    }

    #[test]
    fn string_measures_flow_through_coercion() {
        let measures = [Measure {
            target: RawNumber::from("200"),
            actual: RawNumber::from("n/a"),
        }];
        assert_eq!(aggregate_progress(&measures), 0);
        assert!(measures[0].actual().is_fallback());
    }
}
