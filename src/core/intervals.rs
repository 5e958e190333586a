//! Clipping of event spans to a bounding window.

use crate::models::bucket::Window;
use crate::models::event::TimeSpan;
use chrono::NaiveDateTime;

/// A half-open `[start, end)` activity interval, always fully inside the
/// window it was clipped to. `start < end` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Half-open containment: `start <= t < end`.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Clip each span to the window; spans that collapse to empty are discarded.
/// Overlapping same-party spans are kept as-is: activity detection is a
/// boolean containment test, so they cannot double-count per segment.
pub fn clip_to_window(spans: &[TimeSpan], window: &Window) -> Vec<Interval> {
    let mut out = Vec::new();

    for span in spans {
        let start = span.start.max(window.start);
        let end = span.end.min(window.end);
        if start < end {
            out.push(Interval { start, end });
        }
    }

    out
}
