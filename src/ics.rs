//! ICS file loading using the icalendar crate's parser.
//!
//! The core assumes timezone-resolved instants, so this loader maps every
//! DTSTART/DTEND to a naive instant: date-only values become midnight, UTC
//! values keep their UTC clock time, zoned and floating values keep their
//! literal clock time. No timezone conversion and no recurrence expansion
//! happen here.

use crate::errors::{AppError, AppResult};
use crate::models::event::RawEvent;
use chrono::NaiveDateTime;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use std::fs;
use std::path::Path;

/// Load all VEVENTs from an .ics file. Components without a usable
/// DTSTART/DTEND are skipped; an unreadable or unparseable file is fatal.
pub fn load_events(path: &Path) -> AppResult<Vec<RawEvent>> {
    let content = fs::read_to_string(path)?;
    parse_events(&content)
}

/// Parse ICS content into raw events.
pub fn parse_events(content: &str) -> AppResult<Vec<RawEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| AppError::Calendar(e.to_string()))?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect();

    Ok(events)
}

fn parse_vevent(vevent: &Component) -> Option<RawEvent> {
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    let start = prop_instant(vevent, "DTSTART")?;
    let end = prop_instant(vevent, "DTEND")?;

    Some(RawEvent {
        summary,
        start,
        end,
    })
}

fn prop_instant(vevent: &Component, name: &str) -> Option<NaiveDateTime> {
    let prop = vevent.find_prop(name)?;
    let dpt = DatePerhapsTime::try_from(prop).ok()?;
    to_instant(dpt)
}

/// Resolve icalendar's DatePerhapsTime to the naive instant the core works
/// with.
fn to_instant(dpt: DatePerhapsTime) -> Option<NaiveDateTime> {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_hms_opt(0, 0, 0),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => Some(dt.naive_utc()),
            CalendarDateTime::Floating(naive) => Some(naive),
            CalendarDateTime::WithTimezone { date_time, .. } => Some(date_time),
        },
    }
}
