//! Decomposition of a window into atomic constant-state segments.

use crate::core::intervals::Interval;
use crate::models::bucket::Window;
use chrono::NaiveDateTime;

/// A maximal sub-span of the window within which both parties' activity
/// state is constant. The midpoint is where activity gets sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub midpoint: NaiveDateTime,
}

/// Collect every distinct boundary instant (window bounds plus all interval
/// bounds), sort ascending, and emit one segment per consecutive pair.
///
/// The segments exactly tile the window: no gaps, no overlaps. Every
/// interval endpoint is a segment boundary, which is what makes midpoint
/// sampling safe downstream. A degenerate window yields no segments.
pub fn segments(window: &Window, a: &[Interval], b: &[Interval]) -> Vec<Segment> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut points: Vec<NaiveDateTime> = vec![window.start, window.end];
    for iv in a.iter().chain(b.iter()) {
        points.push(iv.start);
        points.push(iv.end);
    }
    points.sort();
    points.dedup();

    points
        .windows(2)
        .map(|pair| Segment {
            start: pair[0],
            end: pair[1],
            midpoint: pair[0] + (pair[1] - pair[0]) / 2,
        })
        .collect()
}
