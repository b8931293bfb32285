//! KRA-level aggregation
//!
//! Status aggregation escalates pessimistically: any bad signal in one child
//! dominates, while `completed` needs every child to agree.

use crate::coerce::{coerce_numeric, Coerced, RawNumber};
use crate::status::KpiStatus;
use serde::{Deserialize, Serialize};

/// Statuses checked with "any child matches", in priority order
///
/// `completed` is deliberately absent: it requires all children.
pub const PRECEDENCE: [KpiStatus; 5] = [
    KpiStatus::AtRisk,
    KpiStatus::Behind,
    KpiStatus::OnHold,
    KpiStatus::InProgress,
    KpiStatus::OnTrack,
];

/// A record carrying a status
pub trait HasStatus {
    /// The record's status, `None` if upstream sent an unrecognized value
    fn status(&self) -> Option<KpiStatus>;
}

impl HasStatus for KpiStatus {
    fn status(&self) -> Option<KpiStatus> {
        Some(*self)
    }
}

impl HasStatus for Option<KpiStatus> {
    fn status(&self) -> Option<KpiStatus> {
        *self
    }
}

impl<T: HasStatus + ?Sized> HasStatus for &T {
    fn status(&self) -> Option<KpiStatus> {
        (**self).status()
    }
}

/// A record carrying a target and an actual value
pub trait HasMeasures {
    /// Target value after coercion
    fn target(&self) -> Coerced;
    /// Actual value after coercion
    fn actual(&self) -> Coerced;
}

impl<T: HasMeasures + ?Sized> HasMeasures for &T {
    fn target(&self) -> Coerced {
        (**self).target()
    }

    fn actual(&self) -> Coerced {
        (**self).actual()
    }
}

/// Plain target/actual pair
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measure {
    /// Target value
    #[serde(default)]
    pub target: RawNumber,
    /// Actual value
    #[serde(default)]
    pub actual: RawNumber,
}

impl Measure {
    /// Create from numbers
    #[inline]
    #[must_use]
    pub fn new(target: f64, actual: f64) -> Self {
        Self {
            target: RawNumber::Number(target),
            actual: RawNumber::Number(actual),
        }
    }
}

impl HasMeasures for Measure {
    fn target(&self) -> Coerced {
        coerce_numeric(&self.target)
    }

    fn actual(&self) -> Coerced {
        coerce_numeric(&self.actual)
    }
}

/// Per-status child counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// `on-track` children
    pub on_track: usize,
    /// `at-risk` children
    pub at_risk: usize,
    /// `behind` children
    pub behind: usize,
    /// `completed` children
    pub completed: usize,
    /// `not-started` children
    pub not_started: usize,
    /// `in-progress` children
    pub in_progress: usize,
    /// `on-hold` children
    pub on_hold: usize,
    /// Children whose status was not recognized
    pub unrecognized: usize,
}

impl StatusBreakdown {
    /// Count the statuses of `children`
    #[must_use]
    pub fn from_children<T: HasStatus>(children: &[T]) -> Self {
        let mut breakdown = Self::default();
        for child in children {
            breakdown.record(child.status());
        }
        breakdown
    }

    /// Add one child
    pub fn record(&mut self, status: Option<KpiStatus>) {
        let slot = match status {
            Some(KpiStatus::OnTrack) => &mut self.on_track,
            Some(KpiStatus::AtRisk) => &mut self.at_risk,
            Some(KpiStatus::Behind) => &mut self.behind,
            Some(KpiStatus::Completed) => &mut self.completed,
            Some(KpiStatus::NotStarted) => &mut self.not_started,
            Some(KpiStatus::InProgress) => &mut self.in_progress,
            Some(KpiStatus::OnHold) => &mut self.on_hold,
            None => &mut self.unrecognized,
        };
        *slot += 1;
    }

    /// Merge another breakdown into this one
    pub fn merge(&mut self, other: &Self) {
        self.on_track += other.on_track;
        self.at_risk += other.at_risk;
        self.behind += other.behind;
        self.completed += other.completed;
        self.not_started += other.not_started;
        self.in_progress += other.in_progress;
        self.on_hold += other.on_hold;
        self.unrecognized += other.unrecognized;
    }

    /// Children with the given status
    #[must_use]
    pub fn count(&self, status: KpiStatus) -> usize {
        match status {
            KpiStatus::OnTrack => self.on_track,
            KpiStatus::AtRisk => self.at_risk,
            KpiStatus::Behind => self.behind,
            KpiStatus::Completed => self.completed,
            KpiStatus::NotStarted => self.not_started,
            KpiStatus::InProgress => self.in_progress,
            KpiStatus::OnHold => self.on_hold,
        }
    }

    /// Total children counted, including unrecognized ones
    #[must_use]
    pub fn total(&self) -> usize {
        KpiStatus::ALL.iter().map(|s| self.count(*s)).sum::<usize>() + self.unrecognized
    }

    /// Status the parent takes given these counts
    #[must_use]
    pub fn dominant(&self) -> KpiStatus {
        let total = self.total();
        if total == 0 {
            return KpiStatus::NotStarted;
        }
        if let Some(status) = PRECEDENCE.into_iter().find(|s| self.count(*s) > 0) {
            return status;
        }
        if self.completed == total {
            return KpiStatus::Completed;
        }
        KpiStatus::NotStarted
    }
}

/// Derive a parent status from its children
///
/// Empty input yields `not-started`. Otherwise the first [`PRECEDENCE`] entry
/// any child matches wins, then `completed` if every child is completed, else
/// `not-started`.
#[must_use]
pub fn aggregate_status<T: HasStatus>(children: &[T]) -> KpiStatus {
    StatusBreakdown::from_children(children).dominant()
}

/// Derive a parent progress percentage from its children
///
/// `round(min(100, 100 * sum(actual) / sum(target)))`, or 0 when the target
/// sum is zero. Unreadable values count as zero.
#[must_use]
pub fn aggregate_progress<T: HasMeasures>(children: &[T]) -> u8 {
    let (target_sum, actual_sum) = children.iter().fold((0.0, 0.0), |(t, a), child| {
        (t + child.target().value(), a + child.actual().value())
    });
    progress_ratio(target_sum, actual_sum)
}

/// Progress of a single KPI
#[must_use]
pub fn kpi_progress<T: HasMeasures>(kpi: &T) -> u8 {
    progress_ratio(kpi.target().value(), kpi.actual().value())
}

/// Capped percentage of `actual` over `target`, always within `[0, 100]`
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_ratio(target: f64, actual: f64) -> u8 {
    if target == 0.0 || !target.is_finite() || !actual.is_finite() {
        return 0;
    }
    let percent = (100.0 * actual / target).min(100.0);
    if percent.is_nan() || percent <= 0.0 {
        return 0;
    }
    percent.round() as u8
}
