//! Timeline zoom levels
//!
//! Provides [`ViewGranularity`], which selects the bucket math used for
//! positioning.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Zoom level of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGranularity {
    /// Four buckets of 25% each
    #[default]
    Quarters,
    /// Twelve buckets of 100/12 % each
    Months,
    /// Fifty-two week buckets
    Weeks,
}

impl ViewGranularity {
    /// Every granularity, coarsest first
    pub const ALL: [Self; 3] = [Self::Quarters, Self::Months, Self::Weeks];

    /// Number of buckets the year is split into
    #[inline]
    #[must_use]
    pub fn bucket_count(self) -> usize {
        match self {
            Self::Quarters => 4,
            Self::Months => 12,
            Self::Weeks => 52,
        }
    }

    /// Width of one bucket in percent
    #[inline]
    #[must_use]
    pub fn bucket_width(self) -> f64 {
        match self {
            Self::Quarters => 25.0,
            Self::Months => 100.0 / 12.0,
            Self::Weeks => 100.0 / 52.0,
        }
    }

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quarters => "quarters",
            Self::Months => "months",
            Self::Weeks => "weeks",
        }
    }
}

impl Display for ViewGranularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Granularity parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GranularityError {
    /// Name is not one of quarters/months/weeks
    #[error("unknown view granularity: {0}")]
    Unknown(String),
}

impl FromStr for ViewGranularity {
    type Err = GranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarters" | "quarter" | "q" => Ok(Self::Quarters),
            "months" | "month" | "m" => Ok(Self::Months),
            "weeks" | "week" | "w" => Ok(Self::Weeks),
            _ => Err(GranularityError::Unknown(s.to_string())),
        }
    }
}
