use crate::utils::date::month_name;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A half-open `[start, end)` query bound, typically one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    /// A degenerate window (end <= start) yields no segments downstream.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One calendar month selected for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    pub label: String,
    pub year: i32,
    pub month: u32, // 1..=12
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            label: month_name(month).to_string(),
            year,
            month,
        }
    }

    /// `[first-of-month 00:00, first-of-next-month 00:00)`, or None for a
    /// month/year combination chrono cannot represent.
    pub fn window(&self) -> Option<Window> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let (ny, nm) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let end = NaiveDate::from_ymd_opt(ny, nm, 1)?;
        Some(Window {
            start: start.and_hms_opt(0, 0, 0)?,
            end: end.and_hms_opt(0, 0, 0)?,
        })
    }
}

/// Per-bucket weighted results. Weekend-day tallies are only populated when
/// the weekend tally is enabled.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub bucket: MonthBucket,
    pub party_a_weighted: f64,
    pub party_b_weighted: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_a_weekend_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_b_weekend_days: Option<f64>,
}

/// Sums of all ResultRow fields across buckets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Totals {
    pub party_a_weighted: f64,
    pub party_b_weighted: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_a_weekend_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_b_weekend_days: Option<f64>,
}

impl Totals {
    pub fn add_row(&mut self, row: &ResultRow) {
        self.party_a_weighted += row.party_a_weighted;
        self.party_b_weighted += row.party_b_weighted;
        if let Some(v) = row.party_a_weekend_days {
            *self.party_a_weekend_days.get_or_insert(0.0) += v;
        }
        if let Some(v) = row.party_b_weekend_days {
            *self.party_b_weekend_days.get_or_insert(0.0) += v;
        }
    }
}

impl ResultRow {
    /// An all-zero row for a bucket, with weekend tallies present but zero
    /// when the tally is enabled.
    pub fn zero(bucket: MonthBucket, weekend_tally: bool) -> Self {
        let tally = if weekend_tally { Some(0.0) } else { None };
        Self {
            bucket,
            party_a_weighted: 0.0,
            party_b_weighted: 0.0,
            party_a_weekend_days: tally,
            party_b_weekend_days: tally,
        }
    }
}

/// Full pipeline output: one row per requested bucket, in request order,
/// plus grand totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub rows: Vec<ResultRow>,
    pub totals: Totals,
}
