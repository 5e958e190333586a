//! The aggregation pipeline: per-bucket folds over atomic segments, plus
//! grand totals. Pure function of (events, buckets, options); nothing here
//! rounds, prints, or keeps state between runs.

use crate::core::apportion::{apportion, is_active};
use crate::core::intervals::{Interval, clip_to_window};
use crate::core::segmenter::segments;
use crate::core::weigher::{day_coefficient, is_weekend, weighted_days};
use crate::models::bucket::{MonthBucket, Report, ResultRow, Window};
use crate::models::event::ClassifiedEvents;
use crate::models::weights::{WeighMode, WeightConfig};
use chrono::{NaiveDate, NaiveDateTime};

/// Per-run options, passed in explicitly (no process-wide state).
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub weights: WeightConfig,
    pub mode: WeighMode,
    pub weekend_tally: bool,
}

/// Compute one row per bucket, in input order, and the grand totals.
/// An empty bucket list yields an empty report; that is a valid outcome.
pub fn compute_report(
    events: &ClassifiedEvents,
    buckets: &[MonthBucket],
    opts: &ReportOptions,
) -> Report {
    let mut report = Report::default();
    if opts.weekend_tally {
        report.totals.party_a_weekend_days = Some(0.0);
        report.totals.party_b_weekend_days = Some(0.0);
    }

    for bucket in buckets {
        let row = bucket_row(events, bucket.clone(), opts);
        report.totals.add_row(&row);
        report.rows.push(row);
    }

    report
}

fn bucket_row(events: &ClassifiedEvents, bucket: MonthBucket, opts: &ReportOptions) -> ResultRow {
    let Some(window) = bucket.window() else {
        return ResultRow::zero(bucket, opts.weekend_tally);
    };
    if window.is_empty() {
        return ResultRow::zero(bucket, opts.weekend_tally);
    }

    let a = clip_to_window(&events.party_a, &window);
    let b = clip_to_window(&events.party_b, &window);

    let mut row = ResultRow::zero(bucket, opts.weekend_tally);

    match opts.mode {
        WeighMode::Fractional => fold_segments(&window, &a, &b, opts, &mut row),
        WeighMode::WholeDay => fold_days(&window, &a, &b, opts, &mut row),
    }

    if opts.weekend_tally {
        let (wa, wb) = weekend_day_tally(&window, &a, &b);
        row.party_a_weekend_days = Some(wa);
        row.party_b_weekend_days = Some(wb);
    }

    row
}

/// Canonical mode: weigh each atomic segment fractionally and apportion by
/// midpoint activity. Segments where neither party is active contribute
/// nothing, so the invariant share_a + share_b == weight holds for every
/// counted segment.
fn fold_segments(
    window: &Window,
    a: &[Interval],
    b: &[Interval],
    opts: &ReportOptions,
    row: &mut ResultRow,
) {
    for seg in segments(window, a, b) {
        let weight = weighted_days(seg.start, seg.end, &opts.weights);
        if weight <= 0.0 {
            continue;
        }
        let share = apportion(weight, is_active(seg.midpoint, a), is_active(seg.midpoint, b));
        row.party_a_weighted += share.party_a;
        row.party_b_weighted += share.party_b;
    }
}

/// Simplified mode: each calendar day is billed atomically at its own
/// coefficient; a party is active on a day if any of its intervals touches
/// the day's `[00:00, 24:00)` bound. Trades sub-day precision for
/// simplicity.
fn fold_days(
    window: &Window,
    a: &[Interval],
    b: &[Interval],
    opts: &ReportOptions,
    row: &mut ResultRow,
) {
    for day in window_days(window) {
        let active_a = touches_day(a, day);
        let active_b = touches_day(b, day);
        let share = apportion(day_coefficient(day, &opts.weights), active_a, active_b);
        row.party_a_weighted += share.party_a;
        row.party_b_weighted += share.party_b;
    }
}

/// Weekend-day counts per party: an exclusively covered Saturday or Sunday
/// counts 1.0, a jointly covered one 0.5 to each.
fn weekend_day_tally(window: &Window, a: &[Interval], b: &[Interval]) -> (f64, f64) {
    let mut tally_a = 0.0;
    let mut tally_b = 0.0;

    for day in window_days(window) {
        if !is_weekend(day) {
            continue;
        }
        let share = apportion(1.0, touches_day(a, day), touches_day(b, day));
        tally_a += share.party_a;
        tally_b += share.party_b;
    }

    (tally_a, tally_b)
}

fn window_days(window: &Window) -> impl Iterator<Item = NaiveDate> + use<> {
    let first = window.start.date();
    let end = window.end;
    std::iter::successors(Some(first), |d| d.succ_opt())
        .take_while(move |d| day_start(*d).is_some_and(|s| s < end))
}

fn day_start(day: NaiveDate) -> Option<NaiveDateTime> {
    day.and_hms_opt(0, 0, 0)
}

/// Whether any interval intersects the day's `[00:00, 24:00)` bound.
fn touches_day(intervals: &[Interval], day: NaiveDate) -> bool {
    let Some(start) = day_start(day) else {
        return false;
    };
    let Some(end) = day.succ_opt().and_then(day_start) else {
        return false;
    };
    intervals.iter().any(|iv| iv.start < end && iv.end > start)
}
