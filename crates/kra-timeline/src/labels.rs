//! Header labels for timeline buckets

use crate::granularity::ViewGranularity;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Column header labels, one per bucket, left to right
#[must_use]
pub fn bucket_labels(granularity: ViewGranularity) -> Vec<String> {
    match granularity {
        ViewGranularity::Quarters => (1..=4).map(|q| format!("Q{q}")).collect(),
        ViewGranularity::Months => MONTHS.iter().map(ToString::to_string).collect(),
        ViewGranularity::Weeks => (1..=52).map(|w| format!("W{w}")).collect(),
    }
}
