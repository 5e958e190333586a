//! Event classification: decides which party a calendar event belongs to by
//! matching keyword patterns against the normalized event name.

use crate::errors::{AppError, AppResult};
use crate::models::event::{ClassifiedEvents, RawEvent, TimeSpan};
use crate::models::party::Party;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics (NFD decomposition, combining marks removed) and
/// lowercase. An empty or missing name normalizes to the empty string and
/// matches nothing.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

pub struct Classifier {
    party_a: Regex,
    party_b: Regex,
}

impl Classifier {
    /// Compile the two word-boundary patterns. Patterns are matched against
    /// normalized text, so they should be written in lowercase ASCII.
    pub fn new(pattern_a: &str, pattern_b: &str) -> AppResult<Self> {
        let party_a = Regex::new(pattern_a)
            .map_err(|e| AppError::InvalidPattern(pattern_a.to_string(), e))?;
        let party_b = Regex::new(pattern_b)
            .map_err(|e| AppError::InvalidPattern(pattern_b.to_string(), e))?;
        Ok(Self { party_a, party_b })
    }

    /// First-match-wins, A before B: an event whose name matches both
    /// patterns is classified as A. This ordering is a deliberate tie-break
    /// rule, not an accident; do not reverse it.
    pub fn classify(&self, summary: &str) -> Option<Party> {
        let clean = normalize(summary);
        if self.party_a.is_match(&clean) {
            Some(Party::A)
        } else if self.party_b.is_match(&clean) {
            Some(Party::B)
        } else {
            None
        }
    }

    /// Split raw events into per-party span lists. Unmatched events are
    /// excluded; malformed events (start >= end) are dropped here so nothing
    /// downstream has to defend against them.
    pub fn split(&self, events: &[RawEvent]) -> ClassifiedEvents {
        let mut out = ClassifiedEvents::default();

        for ev in events {
            if ev.start >= ev.end {
                continue;
            }
            let span = TimeSpan {
                start: ev.start,
                end: ev.end,
            };
            match self.classify(&ev.summary) {
                Some(Party::A) => out.party_a.push(span),
                Some(Party::B) => out.party_b.push(span),
                None => {}
            }
        }

        out
    }
}
