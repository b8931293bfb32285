//! Source of "today"
//!
//! Anything that depends on the current date takes a [`Clock`] so tests can
//! pin it with [`FixedClock`].

use crate::granularity::ViewGranularity;
use crate::position::position;
use chrono::{Local, NaiveDate};

/// Provides the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date in local time
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Pin the clock to `today`
    #[inline]
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Position of the "today" line on the timeline
#[inline]
#[must_use]
pub fn today_marker<C: Clock + ?Sized>(clock: &C, granularity: ViewGranularity) -> f64 {
    position(clock.today(), granularity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert_eq!(FixedClock::new(d).today(), d);
    }

    #[test]
    fn marker_accepts_trait_objects() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(d));
        assert_eq!(today_marker(clock.as_ref(), ViewGranularity::Weeks), 0.0);
        assert_eq!(today_marker(&clock, ViewGranularity::Weeks), 0.0);
    }

    #[test]
    fn system_clock_marker_is_in_range() {
        let marker = today_marker(&SystemClock, ViewGranularity::Months);
        assert!((0.0..=100.0).contains(&marker));
    }
}
