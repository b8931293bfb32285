//! Error types for KRA Core
//!
//! Only loading can fail. Rendering degrades instead and reports what it
//! degraded as [`DataQualityIssue`]s.

use chrono::NaiveDate;
use kra_status::RawNumber;
use kra_timeline::GranularityError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::ConfigFormat;

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file extension not recognized
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Config content did not parse
    #[error("invalid {format} config: {message}")]
    InvalidConfig {
        /// Format that was attempted
        format: ConfigFormat,
        /// Parser message
        message: String,
    },

    /// KRA input did not parse
    #[error("invalid KRA input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Granularity override did not parse
    #[error("granularity error: {0}")]
    Granularity(#[from] GranularityError),
}

impl DashboardError {
    /// Wrap an I/O error with the path it concerns
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Measure field of a KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureField {
    /// `target`
    Target,
    /// `actual`
    Actual,
}

/// Date field of a KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    /// `startDate`
    StartDate,
    /// `endDate`
    EndDate,
}

/// Something upstream sent that rendering had to paper over
///
/// Detection never changes the rendered numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DataQualityIssue {
    /// Target or actual was present but not numeric; counted as zero
    NonNumericMeasure {
        /// KPI concerned
        kpi_id: Uuid,
        /// Which field
        field: MeasureField,
        /// Raw value received
        raw: RawNumber,
    },
    /// Status string outside the known set
    UnknownStatus {
        /// KPI concerned
        kpi_id: Uuid,
        /// Raw value received
        value: String,
    },
    /// Date string that did not parse
    UnparseableDate {
        /// KPI concerned
        kpi_id: Uuid,
        /// Which field
        field: DateField,
        /// Raw value received
        value: String,
    },
    /// End date earlier than start date; rendered as a marker
    EndBeforeStart {
        /// KPI concerned
        kpi_id: Uuid,
        /// Parsed start
        start: NaiveDate,
        /// Parsed end
        end: NaiveDate,
    },
}

impl DataQualityIssue {
    /// KPI the issue was found on
    #[must_use]
    pub fn kpi_id(&self) -> Uuid {
        match self {
            Self::NonNumericMeasure { kpi_id, .. }
            | Self::UnknownStatus { kpi_id, .. }
            | Self::UnparseableDate { kpi_id, .. }
            | Self::EndBeforeStart { kpi_id, .. } => *kpi_id,
        }
    }
}

impl Display for DataQualityIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNumericMeasure { kpi_id, field, raw } => {
                write!(f, "kpi {kpi_id}: non-numeric {field:?} {raw:?} counted as 0")
            }
            Self::UnknownStatus { kpi_id, value } => {
                write!(f, "kpi {kpi_id}: unknown status {value:?}")
            }
            Self::UnparseableDate { kpi_id, field, value } => {
                write!(f, "kpi {kpi_id}: unparseable {field:?} {value:?}")
            }
            Self::EndBeforeStart { kpi_id, start, end } => {
                write!(f, "kpi {kpi_id}: end {end} precedes start {start}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let err = DashboardError::io(
            "/tmp/missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let text = err.to_string();
        assert!(text.contains("/tmp/missing.toml"));
        assert!(text.contains("gone"));
    }

    #[test]
    fn granularity_error_converts() {
        let err: DashboardError = "days"
            .parse::<kra_timeline::ViewGranularity>()
            .unwrap_err()
            .into();
        assert!(matches!(err, DashboardError::Granularity(_)));
    }

    #[test]
    fn issue_serializes_with_kind_tag() {
        let issue = DataQualityIssue::UnknownStatus {
            kpi_id: Uuid::nil(),
            value: "cancelled".to_string(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "unknown-status");
        assert_eq!(json["value"], "cancelled");
        assert_eq!(issue.kpi_id(), Uuid::nil());
    }

    #[test]
    fn issue_display() {
        let issue = DataQualityIssue::EndBeforeStart {
            kpi_id: Uuid::nil(),
            start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        };
        assert!(issue.to_string().contains("precedes start 2024-05-01"));
    }
}
