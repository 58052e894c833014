//! Split the day by which optional attendees are free.
//!
//! Uses the same two-ordering sweep as [`crate::required`], but instead of one
//! blocking set it keeps a per-attendee count of overlapping events, since an
//! attendee may be double-booked. An attendee is free only while their count is
//! zero. Every boundary at which the free set changes closes one segment and
//! opens the next.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::Event;
use crate::time_range::{order_by_end, order_by_start, TimeRange, END_OF_DAY, START_OF_DAY};

/// A maximal stretch of the day with a constant set of free optional attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySegment {
    pub range: TimeRange,
    /// Optional attendees free for the whole of `range`.
    pub available: BTreeSet<String>,
}

impl AvailabilitySegment {
    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

/// Partition `[0, END_OF_DAY)` into contiguous segments tagged with the
/// optional attendees free throughout each one.
///
/// Segments are in chronological order, `segments[i].range.end() ==
/// segments[i + 1].range.start()`, and together they cover the whole day.
/// Neighbouring segments always carry different free sets.
pub fn partition_optional(
    events: &[Event],
    optional: &BTreeSet<String>,
) -> Vec<AvailabilitySegment> {
    let relevant: Vec<&Event> = events
        .iter()
        .filter(|e| !e.when.is_empty() && e.attends_any(optional))
        .collect();

    let mut by_start = relevant.clone();
    by_start.sort_by(|a, b| order_by_start(&a.when, &b.when));
    let mut by_end = relevant;
    by_end.sort_by(|a, b| order_by_end(&a.when, &b.when));

    let mut busy: HashMap<&str, usize> = HashMap::new();
    let mut segments = Vec::new();
    let mut segment_start = START_OF_DAY;
    let mut available = optional.clone();
    let mut next_start = 0;
    let mut next_end = 0;

    while next_end < by_end.len() {
        let end_at = by_end[next_end].when.end();
        let at = match by_start.get(next_start) {
            Some(event) if event.when.start() < end_at => event.when.start(),
            _ => end_at,
        };

        // Apply every boundary at `at`, ends before starts.
        while let Some(event) = by_end.get(next_end).filter(|e| e.when.end() == at) {
            for attendee in event.attendees.iter().filter(|a| optional.contains(*a)) {
                release(&mut busy, attendee);
            }
            next_end += 1;
        }
        while let Some(event) = by_start.get(next_start).filter(|e| e.when.start() == at) {
            for attendee in event.attendees.iter().filter(|a| optional.contains(*a)) {
                *busy.entry(attendee.as_str()).or_insert(0) += 1;
            }
            next_start += 1;
        }

        let now_free: BTreeSet<String> = optional
            .iter()
            .filter(|a| !busy.contains_key(a.as_str()))
            .cloned()
            .collect();
        if now_free != available {
            if at > segment_start {
                segments.push(AvailabilitySegment {
                    range: TimeRange::new_unchecked(segment_start, at),
                    available: std::mem::replace(&mut available, now_free),
                });
                segment_start = at;
            } else {
                available = now_free;
            }
        }
    }

    if segment_start < END_OF_DAY {
        segments.push(AvailabilitySegment {
            range: TimeRange::new_unchecked(segment_start, END_OF_DAY),
            available,
        });
    }

    debug!(
        optional = optional.len(),
        segments = segments.len(),
        "optional availability partition complete"
    );
    segments
}

/// Drop one overlapping event from `attendee`'s count, forgetting them at zero.
fn release(busy: &mut HashMap<&str, usize>, attendee: &str) {
    if let Some(count) = busy.get_mut(attendee) {
        *count -= 1;
        if *count == 0 {
            busy.remove(attendee);
        }
    }
}
