//! Testing utilities for the KRA dashboard workspace
//!
//! Shared fixtures and builders.

#![allow(missing_docs)]

use chrono::NaiveDate;
use kra_core::{Kpi, Kra};
use kra_status::RawNumber;
use kra_timeline::FixedClock;
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fixed_clock(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::new(date(year, month, day))
}

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Builder for KPI fixtures
#[derive(Debug, Clone)]
pub struct KpiBuilder {
    kpi: Kpi,
}

impl KpiBuilder {
    pub fn new(n: u128) -> Self {
        Self {
            kpi: Kpi {
                id: id(n),
                name: format!("KPI {n}"),
                status: "not-started".to_string(),
                target: RawNumber::Missing,
                actual: RawNumber::Missing,
                unit: None,
                start_date: None,
                end_date: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.kpi.name = name.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.kpi.status = status.to_string();
        self
    }

    pub fn measures(mut self, target: f64, actual: f64) -> Self {
        self.kpi.target = RawNumber::Number(target);
        self.kpi.actual = RawNumber::Number(actual);
        self
    }

    pub fn raw_measures(mut self, target: RawNumber, actual: RawNumber) -> Self {
        self.kpi.target = target;
        self.kpi.actual = actual;
        self
    }

    pub fn dates(mut self, start: &str, end: Option<&str>) -> Self {
        self.kpi.start_date = Some(start.to_string());
        self.kpi.end_date = end.map(ToString::to_string);
        self
    }

    pub fn build(self) -> Kpi {
        self.kpi
    }
}

pub fn kra(n: u128, objective: u128, title: &str, kpis: Vec<Kpi>) -> Kra {
    Kra {
        id: id(n),
        objective_id: id(objective),
        objective: Some(format!("Objective {objective}")),
        title: title.to_string(),
        department: None,
        kpis,
    }
}
