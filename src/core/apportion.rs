//! Splitting a segment's weighted value between the two parties.

use crate::core::intervals::Interval;
use chrono::NaiveDateTime;

/// Each party's share of one segment's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Share {
    pub party_a: f64,
    pub party_b: f64,
}

/// Whether any interval contains `t` (half-open). Boolean, not a count:
/// overlapping same-party intervals must not multiply a segment's weight.
pub fn is_active(t: NaiveDateTime, intervals: &[Interval]) -> bool {
    intervals.iter().any(|iv| iv.contains(t))
}

/// Both active: half each. Exactly one: the full weight. Neither, or a
/// non-positive weight (degenerate segment): nothing for anyone.
pub fn apportion(weight: f64, active_a: bool, active_b: bool) -> Share {
    if weight <= 0.0 {
        return Share::default();
    }
    match (active_a, active_b) {
        (true, true) => Share {
            party_a: weight * 0.5,
            party_b: weight * 0.5,
        },
        (true, false) => Share {
            party_a: weight,
            party_b: 0.0,
        },
        (false, true) => Share {
            party_a: 0.0,
            party_b: weight,
        },
        (false, false) => Share::default(),
    }
}
