//! Sample KRA data
//!
//! Generates a deterministic set of KRAs laid out around the clock's "today",
//! for demos and previews without a backend.

use crate::model::{Kpi, Kra};
use chrono::{Duration, NaiveDate};
use kra_status::{KpiStatus, RawNumber};
use kra_timeline::Clock;
use uuid::Uuid;

const OBJECTIVES: [&str; 3] = ["Customer Growth", "Operational Excellence", "People & Culture"];

const TITLES: [&str; 6] = [
    "Expand enterprise accounts",
    "Reduce churn",
    "Shorten delivery cycle",
    "Automate reporting",
    "Improve onboarding",
    "Grow internal mobility",
];

const KPI_NAMES: [&str; 3] = ["Milestones delivered", "Budget consumed", "Stakeholder sign-offs"];

const KPIS_PER_KRA: usize = 3;

/// Generate `count` KRAs around the clock's today
///
/// Output depends only on `count` and the clock's date.
#[must_use]
pub fn generate<C: Clock + ?Sized>(clock: &C, count: usize) -> Vec<Kra> {
    let today = clock.today();
    (0..count).map(|i| sample_kra(today, i)).collect()
}

fn sample_kra(today: NaiveDate, index: usize) -> Kra {
    let objective = index % OBJECTIVES.len();
    Kra {
        id: sample_id(0x1000, index),
        objective_id: sample_id(0x2000, objective),
        objective: Some(OBJECTIVES[objective].to_string()),
        title: TITLES[index % TITLES.len()].to_string(),
        department: None,
        kpis: (0..KPIS_PER_KRA)
            .map(|k| sample_kpi(today, index * KPIS_PER_KRA + k))
            .collect(),
    }
}

fn sample_kpi(today: NaiveDate, seq: usize) -> Kpi {
    let status = KpiStatus::ALL[seq % KpiStatus::ALL.len()];
    let offset = i64::try_from(seq % 12).unwrap_or(0) * 21 - 90;
    let start = today + Duration::days(offset);
    let end = start + Duration::days(45 + i64::try_from(seq % 4).unwrap_or(0) * 30);
    let target = 100.0;
    let actual = match status {
        KpiStatus::Completed => target,
        KpiStatus::NotStarted => 0.0,
        _ => f64::from(u32::try_from((seq * 37) % 100).unwrap_or(0)),
    };

    Kpi {
        id: sample_id(0x3000, seq),
        name: KPI_NAMES[seq % KPI_NAMES.len()].to_string(),
        status: status.as_str().to_string(),
        target: RawNumber::Number(target),
        actual: RawNumber::Number(actual),
        unit: Some("%".to_string()),
        start_date: Some(start.format("%Y-%m-%d").to_string()),
        end_date: Some(end.format("%Y-%m-%d").to_string()),
    }
}

fn sample_id(namespace: u128, index: usize) -> Uuid {
    Uuid::from_u128((namespace << 64) | index as u128)
}
