use caretally::core::aggregate::{ReportOptions, compute_report};
use caretally::core::apportion::{Share, apportion};
use caretally::core::classifier::Classifier;
use caretally::models::bucket::MonthBucket;
use caretally::models::event::RawEvent;
use caretally::models::weights::{WeighMode, WeightConfig};
use chrono::{NaiveDate, NaiveDateTime};

const PATTERN_A: &str = r"\bp\.?\s+ma\s+deti";
const PATTERN_B: &str = r"\bv\.?\s+ma\s+deti";

fn dt(d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

fn event(summary: &str, start: NaiveDateTime, end: NaiveDateTime) -> RawEvent {
    RawEvent {
        summary: summary.to_string(),
        start,
        end,
    }
}

fn opts(weekday: f64, weekend: f64) -> ReportOptions {
    ReportOptions {
        weights: WeightConfig { weekday, weekend },
        mode: WeighMode::Fractional,
        weekend_tally: false,
    }
}

fn january() -> Vec<MonthBucket> {
    vec![MonthBucket::new(2026, 1)]
}

fn split(events: &[RawEvent]) -> caretally::models::event::ClassifiedEvents {
    Classifier::new(PATTERN_A, PATTERN_B).unwrap().split(events)
}

#[test]
fn weekend_weighted_scenario() {
    // Sat 3rd + Sun 4th at 1.5, Mon 5th at 1.0 -> 4.0 for A, nothing for B
    let events = split(&[event("P. ma deti", dt(3, 0), dt(6, 0))]);
    let report = compute_report(&events, &january(), &opts(1.0, 1.5));

    assert_eq!(report.rows.len(), 1);
    approx(report.rows[0].party_a_weighted, 4.0);
    approx(report.rows[0].party_b_weighted, 0.0);
    approx(report.totals.party_a_weighted, 4.0);
    approx(report.totals.party_b_weighted, 0.0);
}

#[test]
fn overlapping_parties_split_the_overlap_in_half() {
    // A covers Jan 10-12, B covers Jan 11-13; Jan 11 is joint
    let events = split(&[
        event("P. ma deti", dt(10, 0), dt(12, 0)),
        event("V. ma deti", dt(11, 0), dt(13, 0)),
    ]);
    let report = compute_report(&events, &january(), &opts(1.0, 1.0));

    approx(report.totals.party_a_weighted, 1.5);
    approx(report.totals.party_b_weighted, 1.5);
}

#[test]
fn totals_conserve_the_weight_of_covered_time() {
    // With equal weights, A + B must equal the length of the covered union
    let events = split(&[
        event("P. ma deti", dt(10, 0), dt(12, 0)),
        event("V. ma deti", dt(11, 0), dt(13, 0)),
    ]);
    let report = compute_report(&events, &january(), &opts(1.0, 1.0));

    approx(
        report.totals.party_a_weighted + report.totals.party_b_weighted,
        3.0,
    );
}

#[test]
fn events_outside_the_bucket_contribute_nothing() {
    let feb = event(
        "P. ma deti",
        NaiveDate::from_ymd_opt(2026, 2, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    let report = compute_report(&split(&[feb]), &january(), &opts(1.0, 1.5));

    approx(report.totals.party_a_weighted, 0.0);
    approx(report.totals.party_b_weighted, 0.0);
}

#[test]
fn overlapping_same_party_intervals_do_not_double_count() {
    // Two A events covering Jan 5-7 and Jan 6-8 (all weekdays). Activity is
    // a boolean, not a count: the union is three days, not four.
    let events = split(&[
        event("P. ma deti", dt(5, 0), dt(7, 0)),
        event("P. ma deti", dt(6, 0), dt(8, 0)),
    ]);
    let report = compute_report(&events, &january(), &opts(1.0, 1.0));

    approx(report.totals.party_a_weighted, 3.0);
}

#[test]
fn pipeline_is_idempotent() {
    let events = split(&[
        event("P. ma deti", dt(3, 6), dt(6, 18)),
        event("V. ma deti", dt(5, 12), dt(9, 0)),
    ]);
    let o = opts(1.0, 1.5);

    let first = compute_report(&events, &january(), &o);
    let second = compute_report(&events, &january(), &o);

    assert_eq!(first.rows.len(), second.rows.len());
    assert_eq!(
        first.totals.party_a_weighted.to_bits(),
        second.totals.party_a_weighted.to_bits()
    );
    assert_eq!(
        first.totals.party_b_weighted.to_bits(),
        second.totals.party_b_weighted.to_bits()
    );
}

#[test]
fn empty_bucket_selection_is_a_valid_empty_report() {
    let events = split(&[event("P. ma deti", dt(3, 0), dt(6, 0))]);
    let report = compute_report(&events, &[], &opts(1.0, 1.5));

    assert!(report.rows.is_empty());
    approx(report.totals.party_a_weighted, 0.0);
    approx(report.totals.party_b_weighted, 0.0);
}

#[test]
fn rows_follow_bucket_input_order() {
    let events = split(&[event("P. ma deti", dt(3, 0), dt(6, 0))]);
    let buckets = vec![
        MonthBucket::new(2026, 3),
        MonthBucket::new(2026, 1),
        MonthBucket::new(2026, 2),
    ];
    let report = compute_report(&events, &buckets, &opts(1.0, 1.5));

    let months: Vec<u32> = report.rows.iter().map(|r| r.bucket.month).collect();
    assert_eq!(months, vec![3, 1, 2]);
    approx(report.rows[1].party_a_weighted, 4.0);
}

#[test]
fn whole_day_mode_bills_partial_days_in_full() {
    // Four hours of Saturday the 3rd: fractional bills 4/24 of 1.5,
    // whole-day bills the entire 1.5
    let events = split(&[event("P. ma deti", dt(3, 10), dt(3, 14))]);

    let fractional = compute_report(&events, &january(), &opts(1.0, 1.5));
    approx(fractional.totals.party_a_weighted, (4.0 / 24.0) * 1.5);

    let mut whole = opts(1.0, 1.5);
    whole.mode = WeighMode::WholeDay;
    let report = compute_report(&events, &january(), &whole);
    approx(report.totals.party_a_weighted, 1.5);
}

#[test]
fn whole_day_mode_splits_jointly_touched_days() {
    // Both parties touch Monday the 5th
    let events = split(&[
        event("P. ma deti", dt(5, 0), dt(5, 12)),
        event("V. ma deti", dt(5, 12), dt(6, 0)),
    ]);
    let mut o = opts(1.0, 1.5);
    o.mode = WeighMode::WholeDay;
    let report = compute_report(&events, &january(), &o);

    approx(report.totals.party_a_weighted, 0.5);
    approx(report.totals.party_b_weighted, 0.5);
}

#[test]
fn weekend_tally_counts_exclusive_and_joint_days() {
    // A alone on Sat 3rd + Sun 4th, both parties on Sat 10th
    let events = split(&[
        event("P. ma deti", dt(3, 0), dt(5, 0)),
        event("P. ma deti", dt(10, 0), dt(11, 0)),
        event("V. ma deti", dt(10, 0), dt(11, 0)),
    ]);
    let mut o = opts(1.0, 1.5);
    o.weekend_tally = true;
    let report = compute_report(&events, &january(), &o);

    approx(report.rows[0].party_a_weekend_days.unwrap(), 2.5);
    approx(report.rows[0].party_b_weekend_days.unwrap(), 0.5);
    approx(report.totals.party_a_weekend_days.unwrap(), 2.5);
    approx(report.totals.party_b_weekend_days.unwrap(), 0.5);
}

#[test]
fn tally_is_absent_when_not_requested() {
    let events = split(&[event("P. ma deti", dt(3, 0), dt(6, 0))]);
    let report = compute_report(&events, &january(), &opts(1.0, 1.5));

    assert!(report.rows[0].party_a_weekend_days.is_none());
    assert!(report.totals.party_a_weekend_days.is_none());
}

#[test]
fn december_bucket_window_rolls_into_next_year() {
    let window = MonthBucket::new(2026, 12).window().unwrap();
    assert_eq!(
        window.end.date(),
        NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
    );
}

#[test]
fn apportionment_shares_are_exhaustive_and_conserving() {
    assert_eq!(
        apportion(2.0, true, true),
        Share {
            party_a: 1.0,
            party_b: 1.0
        }
    );
    assert_eq!(
        apportion(2.0, true, false),
        Share {
            party_a: 2.0,
            party_b: 0.0
        }
    );
    assert_eq!(
        apportion(2.0, false, true),
        Share {
            party_a: 0.0,
            party_b: 2.0
        }
    );
    assert_eq!(apportion(2.0, false, false), Share::default());
    // degenerate weight must not flip any accumulator
    assert_eq!(apportion(0.0, true, true), Share::default());
    assert_eq!(apportion(-1.0, true, false), Share::default());
}
