//! Scheduled durations
//!
//! Provides [`TimeSpan`] and lenient parsing of upstream date strings.

use crate::granularity::ViewGranularity;
use crate::position::{position, width, BarGeometry};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Scheduled duration of a KPI
///
/// `end >= start` is expected but not enforced; inverted spans still render
/// as a minimum-width marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// First day
    pub start: NaiveDate,
    /// Last day, `None` for point-in-time events
    pub end: Option<NaiveDate>,
}

impl TimeSpan {
    /// Create a span
    #[inline]
    #[must_use]
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Create a point-in-time span
    #[inline]
    #[must_use]
    pub fn point(at: NaiveDate) -> Self {
        Self { start: at, end: None }
    }

    /// Build a span from raw upstream strings
    ///
    /// Returns `None` when the start is missing or unparseable. An
    /// unparseable end degrades to a point event.
    #[must_use]
    pub fn from_raw(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = start.and_then(parse_date)?;
        let end = end.and_then(parse_date);
        Some(Self { start, end })
    }

    /// Whether this span has no distinct end
    #[inline]
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.end.map_or(true, |end| end == self.start)
    }

    /// Whether the end precedes the start
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end.is_some_and(|end| end < self.start)
    }

    /// Whether the span crosses into another calendar year
    #[inline]
    #[must_use]
    pub fn crosses_year(&self) -> bool {
        use chrono::Datelike;
        self.end.is_some_and(|end| end.year() != self.start.year())
    }

    /// Number of days covered, inclusive; point events cover one day
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        match self.end {
            Some(end) if end > self.start => (end - self.start).num_days() + 1,
            _ => 1,
        }
    }

    /// Offset of the start date
    #[inline]
    #[must_use]
    pub fn left(&self, granularity: ViewGranularity) -> f64 {
        position(self.start, granularity)
    }

    /// Bar width for this span
    #[inline]
    #[must_use]
    pub fn width(&self, granularity: ViewGranularity) -> f64 {
        width(self.start, self.end, granularity)
    }

    /// Full bar placement
    #[inline]
    #[must_use]
    pub fn geometry(&self, granularity: ViewGranularity) -> BarGeometry {
        BarGeometry::compute(self.start, self.end, granularity)
    }
}

/// Parse an upstream date string
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps. Blank or unrecognized input yields `None`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}
