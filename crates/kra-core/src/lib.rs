//! KRA Dashboard Core
//!
//! Composes the leaf crates into the KRA dashboard view:
//!
//! 1. [`kra_status`] derives each KRA's status badge and progress bar
//! 2. [`kra_timeline`] places each KPI's bar on the timeline
//! 3. [`kra_grouping`] decides which rows print objective and title headers
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use kra_core::prelude::*;
//!
//! let kras = load_kras("kras.json")?;
//! let config = DashboardConfig::from_path("dashboard.toml")?;
//!
//! let view = Dashboard::new(config).render(&kras);
//! println!("{}", render_text(&view));
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod report;
pub mod sample;

pub use config::{ConfigFormat, DashboardConfig, SummaryOrder};
pub use dashboard::{Dashboard, DashboardView, KraSummary, TimelineRow};
pub use error::{DashboardError, DataQualityIssue, DateField, MeasureField};
pub use model::{load_kras, parse_kras, Kpi, Kra};
pub use report::render_text;

/// Convenience re-exports, including the leaf crates' main types
pub mod prelude {
    pub use crate::config::{DashboardConfig, SummaryOrder};
    pub use crate::dashboard::{Dashboard, DashboardView};
    pub use crate::error::{DashboardError, DataQualityIssue};
    pub use crate::model::{load_kras, parse_kras, Kpi, Kra};
    pub use crate::report::render_text;
    pub use kra_grouping::{FirstOccurrenceIndex, GroupFlags};
    pub use kra_status::{aggregate_progress, aggregate_status, KpiStatus, RawNumber};
    pub use kra_timeline::{Clock, FixedClock, SystemClock, TimeSpan, ViewGranularity};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
