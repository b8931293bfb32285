//! Status values
//!
//! Provides [`KpiStatus`], the closed set of statuses a KPI or KRA can carry.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Status of a KPI, or the derived status of a KRA
///
/// Adding a variant requires revisiting the aggregation precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiStatus {
    /// Progressing as planned
    OnTrack,
    /// Likely to miss its target
    AtRisk,
    /// Already behind schedule
    Behind,
    /// Target reached
    Completed,
    /// Work has not begun
    NotStarted,
    /// Work underway, no assessment yet
    InProgress,
    /// Paused
    OnHold,
}

impl KpiStatus {
    /// Every status value
    pub const ALL: [Self; 7] = [
        Self::OnTrack,
        Self::AtRisk,
        Self::Behind,
        Self::Completed,
        Self::NotStarted,
        Self::InProgress,
        Self::OnHold,
    ];

    /// Wire name (`on-track`, `at-risk`, ...)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::AtRisk => "at-risk",
            Self::Behind => "behind",
            Self::Completed => "completed",
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::OnHold => "on-hold",
        }
    }

    /// Human-readable badge label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::AtRisk => "At Risk",
            Self::Behind => "Behind",
            Self::Completed => "Completed",
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
        }
    }

    /// Badge tone used when rendering
    #[must_use]
    pub fn tone(self) -> StatusTone {
        match self {
            Self::OnTrack | Self::Completed => StatusTone::Positive,
            Self::AtRisk | Self::OnHold => StatusTone::Caution,
            Self::Behind => StatusTone::Critical,
            Self::NotStarted | Self::InProgress => StatusTone::Neutral,
        }
    }

    /// Whether no further work is expected
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Display for KpiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Green
    Positive,
    /// Amber
    Caution,
    /// Red
    Critical,
    /// Grey or blue
    Neutral,
}

/// Status parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// Not one of the known status names
    #[error("unknown status: {0:?}")]
    Unknown(String),
}

impl FromStr for KpiStatus {
    type Err = StatusError;

    /// Accepts wire names plus case, underscore and space variants
    /// (`"On Track"`, `on_track`, `ON-TRACK`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}
