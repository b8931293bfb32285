//! Best-effort numeric coercion
//!
//! Upstream rows carry targets and actuals as numbers, numeric strings,
//! nothing at all, or occasionally some other JSON value entirely. Coercion
//! never fails; values it cannot read become [`Coerced::Fallback`], which
//! counts as zero.

use serde::{Deserialize, Serialize};

/// Numeric field as it arrives from upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// JSON number
    Number(f64),
    /// JSON string, possibly numeric
    Text(String),
    /// Null or absent
    #[default]
    Missing,
    /// Any other JSON value (boolean, object, array)
    Other(serde_json::Value),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawNumber>> From<Option<T>> for RawNumber {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Outcome of coercing a [`RawNumber`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// Value was read as a finite number
    Parsed(f64),
    /// Value was missing or unreadable; treated as zero
    Fallback,
}

impl Coerced {
    /// Numeric value, zero for [`Coerced::Fallback`]
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Parsed(v) => v,
            Self::Fallback => 0.0,
        }
    }

    /// Whether the zero came from a fallback rather than the data
    #[inline]
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Coerce an upstream numeric field
#[must_use]
pub fn coerce_numeric(raw: &RawNumber) -> Coerced {
    let coerced = match raw {
        RawNumber::Number(v) if v.is_finite() => Coerced::Parsed(*v),
        RawNumber::Number(_) | RawNumber::Missing | RawNumber::Other(_) => Coerced::Fallback,
        RawNumber::Text(text) => match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Coerced::Parsed(v),
            _ => Coerced::Fallback,
        },
    };

    if coerced.is_fallback() {
        tracing::debug!("numeric coercion fell back to zero for {:?}", raw);
    }
    coerced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse() {
        assert_eq!(coerce_numeric(&RawNumber::Number(12.5)), Coerced::Parsed(12.5));
        assert_eq!(coerce_numeric(&RawNumber::Number(0.0)), Coerced::Parsed(0.0));
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(coerce_numeric(&RawNumber::from(" 42 ")), Coerced::Parsed(42.0));
        assert_eq!(coerce_numeric(&RawNumber::from("-3.5")), Coerced::Parsed(-3.5));
    }

    #[test]
    fn unreadable_values_fall_back() {
        assert!(coerce_numeric(&RawNumber::from("")).is_fallback());
        assert!(coerce_numeric(&RawNumber::from("ten")).is_fallback());
        assert!(coerce_numeric(&RawNumber::from("NaN")).is_fallback());
        assert!(coerce_numeric(&RawNumber::Number(f64::INFINITY)).is_fallback());
        assert!(coerce_numeric(&RawNumber::Missing).is_fallback());
        assert_eq!(Coerced::Fallback.value(), 0.0);
    }

    #[test]
    fn deserializes_mixed_json() {
        let values: Vec<RawNumber> = serde_json::from_str(r#"[5, "7", null]"#).unwrap();
        assert_eq!(
            values,
            vec![RawNumber::Number(5.0), RawNumber::from("7"), RawNumber::Missing]
        );
    }

    #[test]
    fn non_numeric_json_is_kept_and_falls_back() {
        let values: Vec<RawNumber> =
            serde_json::from_str(r#"[true, {"value": 3}, [1, 2]]"#).unwrap();
        assert!(values.iter().all(|v| matches!(v, RawNumber::Other(_))));
        assert!(values.iter().all(|v| coerce_numeric(v).is_fallback()));
        assert_eq!(values[0], RawNumber::Other(serde_json::Value::Bool(true)));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(RawNumber::from(None::<f64>), RawNumber::Missing);
        assert_eq!(RawNumber::from(Some(3.0)), RawNumber::Number(3.0));
    }
}
