//! Date to percentage mapping
//!
//! Positions are offsets into a single calendar year. Only month and day
//! contribute; the year itself only matters for month and quarter lengths.

use crate::granularity::ViewGranularity;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum bar width in percent, also used for point-in-time events
pub const MIN_BAR_WIDTH: f64 = 2.0;

/// Horizontal offset of `date` on the timeline, in `[0, 100]`
#[must_use]
pub fn position(date: NaiveDate, granularity: ViewGranularity) -> f64 {
    let raw = match granularity {
        ViewGranularity::Quarters => quarter_offset(date),
        ViewGranularity::Months => month_offset(date),
        ViewGranularity::Weeks => week_offset(date),
    };
    clamp_percent(raw)
}

/// Width of a bar from `start` to `end`, in percent
///
/// # Rules
/// - No end, or `end == start` → [`MIN_BAR_WIDTH`] (point event)
/// - Non-positive span (end before start, year wraparound) → [`MIN_BAR_WIDTH`]
/// - Otherwise capped at the right edge and floored at [`MIN_BAR_WIDTH`];
///   the floor wins when the bar starts in the last 2%
#[must_use]
pub fn width(start: NaiveDate, end: Option<NaiveDate>, granularity: ViewGranularity) -> f64 {
    let Some(end) = end else {
        return MIN_BAR_WIDTH;
    };
    if end == start {
        return MIN_BAR_WIDTH;
    }

    let left = position(start, granularity);
    let raw = position(end, granularity) - left;
    if raw.is_nan() || raw <= 0.0 {
        return MIN_BAR_WIDTH;
    }

    raw.min(100.0 - left).max(MIN_BAR_WIDTH)
}

/// Placement of a single bar on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Left offset in percent
    pub left: f64,
    /// Width in percent
    pub width: f64,
}

impl BarGeometry {
    /// Compute geometry for a start date and optional end date
    #[inline]
    #[must_use]
    pub fn compute(start: NaiveDate, end: Option<NaiveDate>, granularity: ViewGranularity) -> Self {
        Self {
            left: position(start, granularity),
            width: width(start, end, granularity),
        }
    }

    /// Right edge in percent
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether the bar was rendered at the minimum marker width
    #[inline]
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.width <= MIN_BAR_WIDTH
    }
}

fn clamp_percent(value: f64) -> f64 {
    // max/min drop NaN in favour of the bound
    value.max(0.0).min(100.0)
}

fn quarter_offset(date: NaiveDate) -> f64 {
    let quarter = date.month0() / 3;
    let base = f64::from(quarter) * 25.0;

    let first_month = quarter * 3 + 1;
    let Some(start) = NaiveDate::from_ymd_opt(date.year(), first_month, 1) else {
        return base;
    };
    let next = if quarter == 3 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), first_month + 3, 1)
    };
    let Some(next) = next else {
        return base;
    };

    let days_in_quarter = day_count(next - start);
    let days_into_quarter = day_count(date - start);
    base + (days_into_quarter / days_in_quarter) * 25.0
}

fn month_offset(date: NaiveDate) -> f64 {
    let month_share = 100.0 / 12.0;
    let base = f64::from(date.month0()) / 12.0 * 100.0;

    let Some(days_in_month) = days_in_month(date.year(), date.month()) else {
        return base;
    };
    base + (f64::from(date.day0()) / days_in_month) * month_share
}

fn week_offset(date: NaiveDate) -> f64 {
    let week_number = date.ordinal0() / 7 + 1;
    f64::from(week_number - 1) / 52.0 * 100.0
}

fn days_in_month(year: i32, month: u32) -> Option<f64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(day_count(next - first))
}

#[allow(clippy::cast_precision_loss)]
fn day_count(delta: chrono::TimeDelta) -> f64 {
    delta.num_days() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quarter_starts_land_on_quarter_boundaries() {
        let g = ViewGranularity::Quarters;
        assert!(approx(position(date(2024, 1, 1), g), 0.0));
        assert!(approx(position(date(2024, 4, 1), g), 25.0));
        assert!(approx(position(date(2024, 7, 1), g), 50.0));
        assert!(approx(position(date(2024, 10, 1), g), 75.0));
    }

    #[test]
    fn quarter_fraction_uses_quarter_length() {
        // Q1 2024 has 91 days (leap year)
        let pos = position(date(2024, 2, 15), ViewGranularity::Quarters);
        assert!(approx(pos, 45.0 / 91.0 * 25.0));
    }

    #[test]
    fn month_offsets() {
        let g = ViewGranularity::Months;
        assert!(approx(position(date(2023, 1, 1), g), 0.0));
        assert!(approx(position(date(2023, 2, 1), g), 100.0 / 12.0));
        // Day 16 of a 30-day month sits halfway through the bucket
        let pos = position(date(2023, 4, 16), g);
        assert!(approx(pos, 3.0 / 12.0 * 100.0 + 0.5 * 100.0 / 12.0));
    }

    #[test]
    fn week_offsets() {
        let g = ViewGranularity::Weeks;
        assert!(approx(position(date(2023, 1, 1), g), 0.0));
        assert!(approx(position(date(2023, 1, 7), g), 0.0));
        assert!(approx(position(date(2023, 1, 8), g), 100.0 / 52.0));
    }

    #[test]
    fn last_day_of_year_week_is_clamped() {
        // Day 366 of a leap year falls in week 53
        let pos = position(date(2024, 12, 31), ViewGranularity::Weeks);
        assert!(approx(pos, 100.0));
    }

    #[test]
    fn point_events_use_minimum_width() {
        let d = date(2024, 5, 10);
        for g in ViewGranularity::ALL {
            assert_eq!(width(d, None, g), MIN_BAR_WIDTH);
            assert_eq!(width(d, Some(d), g), MIN_BAR_WIDTH);
        }
    }

    #[test]
    fn inverted_range_falls_back_to_minimum() {
        let w = width(date(2024, 6, 1), Some(date(2024, 2, 1)), ViewGranularity::Months);
        assert_eq!(w, MIN_BAR_WIDTH);
    }

    #[test]
    fn year_wraparound_falls_back_to_minimum() {
        let w = width(date(2024, 11, 1), Some(date(2025, 2, 1)), ViewGranularity::Quarters);
        assert_eq!(w, MIN_BAR_WIDTH);
    }

    #[test]
    fn short_span_is_floored() {
        let w = width(date(2024, 1, 1), Some(date(2024, 1, 2)), ViewGranularity::Quarters);
        assert_eq!(w, MIN_BAR_WIDTH);
    }

    #[test]
    fn bar_never_passes_right_edge() {
        let start = date(2024, 10, 1);
        let bar = BarGeometry::compute(start, Some(date(2024, 12, 31)), ViewGranularity::Months);
        assert!(bar.right() <= 100.0 + 1e-9);
        assert!(bar.width > MIN_BAR_WIDTH);
    }

    #[test]
    fn clamp_handles_nan_and_bounds() {
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(104.0), 100.0);
    }

    #[test]
    fn marker_detection() {
        let d = date(2024, 3, 3);
        assert!(BarGeometry::compute(d, None, ViewGranularity::Weeks).is_marker());
        let long = BarGeometry::compute(d, Some(date(2024, 9, 3)), ViewGranularity::Weeks);
        assert!(!long.is_marker());
    }
}
