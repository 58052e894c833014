//! Combine required-attendee candidates with optional-attendee availability.
//!
//! Two branches:
//!
//! - **All-optional**: no required attendees. Optional attendees are the only
//!   signal, so the long-enough availability segments with the most free
//!   optional attendees are returned as-is. If none has a free optional
//!   attendee, the candidates are returned unmodified.
//! - **Mixed**: every candidate is intersected with every segment it overlaps.
//!   Long-enough intersections are ranked by free optional attendees and only
//!   those matching the global maximum are kept. If none reaches one optional
//!   attendee, the candidates are returned unmodified.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::partition::AvailabilitySegment;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// A resolved slot together with the optional attendees free throughout it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub range: TimeRange,
    pub available: BTreeSet<String>,
}

impl ScoredSlot {
    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

/// Choose the final slots from the scan candidates and the availability segments.
///
/// `candidates` must come from [`crate::required_windows`] and `segments` from
/// [`crate::partition_optional`] for the same events and request.
pub fn optimize(
    candidates: &[TimeRange],
    segments: &[AvailabilitySegment],
    request: &MeetingRequest,
) -> Vec<ScoredSlot> {
    let slots = if !request.has_optional() {
        debug!("no optional attendees; using required-only candidates");
        fallback(candidates, segments)
    } else {
        let best = if request.has_required() {
            best_intersections(candidates, segments, request.duration)
        } else {
            best_segments(segments, request.duration)
        };
        if best.is_empty() {
            debug!("no slot fits any optional attendee; using required-only candidates");
            fallback(candidates, segments)
        } else {
            best
        }
    };

    remove_subsumed(slots)
}

/// Long-enough segments carrying the highest free count. Empty when that
/// maximum is zero.
///
/// Counts are not monotonic in time, so the maximum comes from a full pass.
fn best_segments(segments: &[AvailabilitySegment], duration: u32) -> Vec<ScoredSlot> {
    let best = segments
        .iter()
        .filter(|s| s.range.duration() >= duration)
        .map(AvailabilitySegment::available_count)
        .max()
        .unwrap_or(0);
    debug!(best, "all-optional request");
    if best == 0 {
        return Vec::new();
    }

    segments
        .iter()
        .filter(|s| s.range.duration() >= duration && s.available_count() == best)
        .map(|s| ScoredSlot {
            range: s.range,
            available: s.available.clone(),
        })
        .collect()
}

/// Long-enough candidate/segment intersections carrying the global maximum
/// free count. Empty when that maximum is zero.
fn best_intersections(
    candidates: &[TimeRange],
    segments: &[AvailabilitySegment],
    duration: u32,
) -> Vec<ScoredSlot> {
    let mut best = 0;
    let mut kept: Vec<ScoredSlot> = Vec::new();

    for candidate in candidates {
        for segment in segments.iter().filter(|s| s.range.overlaps(candidate)) {
            let Some(window) = candidate.intersection(&segment.range) else {
                continue;
            };
            if window.duration() < duration {
                continue;
            }
            let count = segment.available_count();
            trace!(%window, count, "feasible intersection");
            if count > best {
                best = count;
                kept.clear();
            }
            if count == best && count > 0 {
                kept.push(ScoredSlot {
                    range: window,
                    available: segment.available.clone(),
                });
            }
        }
    }

    debug!(best, slots = kept.len(), "mixed request");
    kept
}

/// The candidates unchanged, each tagged with the optional attendees free for
/// its whole length.
fn fallback(candidates: &[TimeRange], segments: &[AvailabilitySegment]) -> Vec<ScoredSlot> {
    candidates
        .iter()
        .map(|&range| ScoredSlot {
            range,
            available: free_throughout(&range, segments),
        })
        .collect()
}

fn free_throughout(range: &TimeRange, segments: &[AvailabilitySegment]) -> BTreeSet<String> {
    let mut overlapping = segments.iter().filter(|s| s.range.overlaps(range));
    let Some(first) = overlapping.next() else {
        return BTreeSet::new();
    };
    overlapping.fold(first.available.clone(), |acc, s| {
        acc.intersection(&s.available).cloned().collect()
    })
}

/// Drop every slot contained in another, keep one copy of duplicates, and sort
/// by start time.
pub fn remove_subsumed(mut slots: Vec<ScoredSlot>) -> Vec<ScoredSlot> {
    slots.sort_by(|a, b| a.range.cmp(&b.range));
    slots.dedup_by(|later, earlier| later.range == earlier.range);

    let ranges: Vec<TimeRange> = slots.iter().map(|s| s.range).collect();
    let mut index = 0;
    slots.retain(|slot| {
        let i = index;
        index += 1;
        !ranges
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.contains(&slot.range))
    });
    slots
}
