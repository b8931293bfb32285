//! KRA Timeline Geometry
//!
//! Maps calendar dates onto a fixed-year timeline expressed in percent of the
//! chart width.
//!
//! # Core Concepts
//!
//! - [`ViewGranularity`]: Zoom level of the timeline (quarters, months, weeks)
//! - [`position`]: Horizontal offset of a date, always within `[0, 100]`
//! - [`width`]: Bar width between two dates, never below [`MIN_BAR_WIDTH`]
//! - [`TimeSpan`]: Scheduled duration of a KPI, with lenient parsing
//! - [`Clock`]: Injectable source of "today" for markers and sample data
//!
//! # Example
//!
//! ```rust,ignore
//! use kra_timeline::{TimeSpan, ViewGranularity};
//!
//! let span = TimeSpan::from_raw(Some("2024-01-01"), Some("2024-03-31")).unwrap();
//! let bar = span.geometry(ViewGranularity::Quarters);
//!
//! assert_eq!(bar.left, 0.0);
//! assert!((bar.width - 25.0).abs() < 1.0);
//! ```

mod clock;
mod granularity;
mod labels;
mod position;
mod span;

pub use clock::{today_marker, Clock, FixedClock, SystemClock};
pub use granularity::{GranularityError, ViewGranularity};
pub use labels::bucket_labels;
pub use position::{position, width, BarGeometry, MIN_BAR_WIDTH};
pub use span::{parse_date, TimeSpan};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
