//! Upstream KRA and KPI records
//!
//! Rows arrive as camelCase JSON from the backend. Fields that are often
//! malformed upstream (status, measures, dates) are kept raw and interpreted
//! lazily, so one bad field never rejects a whole record.

use crate::error::{DashboardError, DataQualityIssue, DateField, MeasureField};
use chrono::NaiveDate;
use kra_status::{coerce_numeric, Coerced, HasMeasures, HasStatus, KpiStatus, RawNumber};
use kra_timeline::{parse_date, TimeSpan};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use uuid::Uuid;

/// Key Result Area: a goal owning a list of KPIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kra {
    /// Record id
    pub id: Uuid,
    /// Objective this KRA belongs to
    pub objective_id: Uuid,
    /// Objective display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// KRA title
    pub title: String,
    /// Owning department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Child KPIs, in display order
    #[serde(default)]
    pub kpis: Vec<Kpi>,
}

impl Kra {
    /// Objective label, falling back to the objective id
    #[must_use]
    pub fn objective_label(&self) -> String {
        self.objective
            .clone()
            .unwrap_or_else(|| self.objective_id.to_string())
    }
}

/// Key Performance Indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    /// Record id
    pub id: Uuid,
    /// KPI name
    pub name: String,
    /// Raw status string, empty when upstream sent null
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
    /// Target value
    #[serde(default)]
    pub target: RawNumber,
    /// Actual value
    #[serde(default)]
    pub actual: RawNumber,
    /// Unit label (`%`, `deals`, ...)
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
    /// Raw start date
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    /// Raw end date
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
}

/// Read a text field that upstream sometimes sends as null or a non-string
fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_text(deserializer)?.unwrap_or_default())
}

impl Kpi {
    /// Parsed status, `None` if unrecognized
    #[must_use]
    pub fn parsed_status(&self) -> Option<KpiStatus> {
        self.status.parse().ok()
    }

    /// Scheduled span, `None` without a readable start date
    #[must_use]
    pub fn span(&self) -> Option<TimeSpan> {
        TimeSpan::from_raw(self.start_date.as_deref(), self.end_date.as_deref())
    }

    /// Data quality problems on this record
    #[must_use]
    pub fn issues(&self) -> Vec<DataQualityIssue> {
        let mut issues = Vec::new();

        if self.parsed_status().is_none() {
            issues.push(DataQualityIssue::UnknownStatus {
                kpi_id: self.id,
                value: self.status.clone(),
            });
        }

        for (field, raw) in [
            (MeasureField::Target, &self.target),
            (MeasureField::Actual, &self.actual),
        ] {
            if !matches!(raw, RawNumber::Missing) && coerce_numeric(raw).is_fallback() {
                issues.push(DataQualityIssue::NonNumericMeasure {
                    kpi_id: self.id,
                    field,
                    raw: raw.clone(),
                });
            }
        }

        let start = self.check_date(DateField::StartDate, self.start_date.as_deref(), &mut issues);
        let end = self.check_date(DateField::EndDate, self.end_date.as_deref(), &mut issues);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                issues.push(DataQualityIssue::EndBeforeStart {
                    kpi_id: self.id,
                    start,
                    end,
                });
            }
        }

        issues
    }

    fn check_date(
        &self,
        field: DateField,
        raw: Option<&str>,
        issues: &mut Vec<DataQualityIssue>,
    ) -> Option<NaiveDate> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_date(raw);
        if parsed.is_none() {
            issues.push(DataQualityIssue::UnparseableDate {
                kpi_id: self.id,
                field,
                value: raw.to_string(),
            });
        }
        parsed
    }
}

impl HasStatus for Kpi {
    fn status(&self) -> Option<KpiStatus> {
        self.parsed_status()
    }
}

impl HasMeasures for Kpi {
    fn target(&self) -> Coerced {
        coerce_numeric(&self.target)
    }

    fn actual(&self) -> Coerced {
        coerce_numeric(&self.actual)
    }
}

/// Parse a JSON array of KRA records
///
/// # Errors
/// Returns error if the JSON does not match the record shape
pub fn parse_kras(json: &str) -> Result<Vec<Kra>, DashboardError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON file of KRA records
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub fn load_kras(path: impl AsRef<Path>) -> Result<Vec<Kra>, DashboardError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
    let kras = parse_kras(&text)?;
    tracing::debug!("loaded {} KRAs from {}", kras.len(), path.display());
    Ok(kras)
}
