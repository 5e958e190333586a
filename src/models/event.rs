use chrono::NaiveDateTime;
use serde::Serialize;

/// A calendar event as it comes out of the ICS loader: a display name plus
/// the resolved start/end instants. Nothing is validated here; malformed
/// events (start >= end) are dropped during classification.
#[derive(Debug, Clone, Serialize)]
pub struct RawEvent {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The `[start, end)` span of a classified event, stripped of its name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Per-party event spans after classification. Events matching neither
/// pattern are excluded; events with `start >= end` are dropped.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedEvents {
    pub party_a: Vec<TimeSpan>,
    pub party_b: Vec<TimeSpan>,
}
