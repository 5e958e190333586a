//! Conversion of time spans into weighted day-equivalents.

use crate::models::weights::WeightConfig;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The coefficient a given calendar day is billed at.
pub fn day_coefficient(day: NaiveDate, weights: &WeightConfig) -> f64 {
    if is_weekend(day) {
        weights.weekend
    } else {
        weights.weekday
    }
}

/// Integrate the weight of `[t1, t2)` across midnight boundaries: walk
/// forward from `t1`, cut at each next midnight (clamped to `t2`), and bill
/// each piece's fractional-day duration at its own calendar day's rate.
///
/// A span that never crosses midnight is a single piece. The result depends
/// only on the span and the weights, never on which party is asking.
/// `t1 >= t2` returns 0.
pub fn weighted_days(t1: NaiveDateTime, t2: NaiveDateTime, weights: &WeightConfig) -> f64 {
    let mut total = 0.0;
    let mut cur = t1;

    while cur < t2 {
        let piece_end = match next_midnight(cur) {
            Some(m) => m.min(t2),
            None => t2, // end of representable time
        };
        let duration_days = (piece_end - cur).num_milliseconds() as f64 / MILLIS_PER_DAY;
        total += duration_days * day_coefficient(cur.date(), weights);
        cur = piece_end;
    }

    total
}

/// The first midnight strictly after `t`.
fn next_midnight(t: NaiveDateTime) -> Option<NaiveDateTime> {
    t.date().succ_opt()?.and_hms_opt(0, 0, 0)
}
