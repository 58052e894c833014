//! Entry point: scan, partition, optimize, normalize.

use tracing::debug;

use crate::event::Event;
use crate::optimizer::{self, ScoredSlot};
use crate::partition::partition_optional;
use crate::request::MeetingRequest;
use crate::required::required_windows;
use crate::time_range::TimeRange;

/// Find the time ranges in which the requested meeting can be held.
///
/// Every returned range is at least `request.duration` minutes long and free
/// of events involving a required attendee. Where possible the ranges are
/// narrowed to those that let the most optional attendees join; otherwise the
/// required-only ranges are returned. The result is sorted by start time and
/// no range contains another.
///
/// Never fails: an impossible request yields an empty vector.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_scored(events, request)
        .into_iter()
        .map(|slot| slot.range)
        .collect()
}

/// Like [`query`], but each range also reports which optional attendees are
/// free for all of it.
pub fn query_scored(events: &[Event], request: &MeetingRequest) -> Vec<ScoredSlot> {
    let candidates = required_windows(events, request);
    let segments = partition_optional(events, &request.optional);
    let slots = optimizer::optimize(&candidates, &segments, request);

    debug!(
        required = request.required.len(),
        optional = request.optional.len(),
        duration = request.duration,
        slots = slots.len(),
        "meeting query resolved"
    );
    slots
}
