//! Dashboard configuration
//!
//! [`DashboardConfig`] loads from TOML, YAML or JSON, picked by file
//! extension. Every field has a default so partial files are fine.

use crate::error::DashboardError;
use kra_timeline::ViewGranularity;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Initial timeline zoom level
    pub granularity: ViewGranularity,
    /// Print objective and title on every row instead of once per group
    pub repeat_headers: bool,
    /// Ordering of KRA summary cards
    pub summary_order: SummaryOrder,
    /// Collect and log data quality issues
    pub report_issues: bool,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With granularity
    #[inline]
    #[must_use]
    pub fn with_granularity(mut self, granularity: ViewGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// With header repetition
    #[inline]
    #[must_use]
    pub fn with_repeat_headers(mut self, repeat: bool) -> Self {
        self.repeat_headers = repeat;
        self
    }

    /// With summary ordering
    #[inline]
    #[must_use]
    pub fn with_summary_order(mut self, order: SummaryOrder) -> Self {
        self.summary_order = order;
        self
    }

    /// With issue reporting
    #[inline]
    #[must_use]
    pub fn with_report_issues(mut self, report: bool) -> Self {
        self.report_issues = report;
        self
    }

    /// Load from a file, format chosen by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, the extension is unknown,
    /// or the content does not parse
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        tracing::debug!("loading {} config from {}", format, path.display());
        Self::parse(&text, format)
    }

    /// Parse from a string in the given format
    ///
    /// # Errors
    /// Returns error if the content does not parse
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, DashboardError> {
        let invalid = |message: String| DashboardError::InvalidConfig { format, message };
        match format {
            ConfigFormat::Toml => toml::from_str(text).map_err(|e| invalid(e.to_string())),
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| invalid(e.to_string())),
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| invalid(e.to_string())),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            granularity: ViewGranularity::Quarters,
            repeat_headers: false,
            summary_order: SummaryOrder::Input,
            report_issues: true,
        }
    }
}

/// Ordering of KRA summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryOrder {
    /// Keep upstream order
    #[default]
    Input,
    /// Least progress first
    Progress,
    /// Worst aggregate status first
    Severity,
}

/// Config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect format from a path's extension
    ///
    /// # Errors
    /// Returns error for missing or unknown extensions
    pub fn from_path(path: &Path) -> Result<Self, DashboardError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(DashboardError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Display for ConfigFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}
