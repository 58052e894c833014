//! Sweep for ranges in which every required attendee is free.
//!
//! Events are walked twice in parallel, once ordered by start and once by end.
//! An event that includes at least one required attendee blocks the day from
//! its start until its end; the gaps between blocked stretches are the
//! candidates. When an end and a start share a minute, the end is processed
//! first, so back-to-back meetings leave no gap but also no conflict.

use std::collections::HashSet;

use tracing::debug;

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::{order_by_end, order_by_start, TimeRange, END_OF_DAY, START_OF_DAY};

/// Find every range at least `request.duration` long during which no event
/// containing a required attendee takes place.
///
/// Returned ranges are disjoint and sorted by start time. Optional attendees
/// are ignored. A duration longer than the day yields no ranges.
pub fn required_windows(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let duration = request.duration;
    if duration > END_OF_DAY {
        return Vec::new();
    }

    // Empty events block nothing, and their end would sort ahead of their start.
    let live: Vec<usize> = (0..events.len())
        .filter(|&i| !events[i].when.is_empty())
        .collect();

    let mut by_start = live.clone();
    by_start.sort_by(|&a, &b| order_by_start(&events[a].when, &events[b].when));
    let mut by_end = live;
    by_end.sort_by(|&a, &b| order_by_end(&events[a].when, &events[b].when));

    let mut windows = Vec::new();
    let mut window_start = START_OF_DAY;
    // Tracked by index so identical events are blocked and released independently.
    let mut blocking: HashSet<usize> = HashSet::new();
    let mut next_start = 0;
    let mut next_end = 0;

    while next_end < by_end.len() {
        let ending = by_end[next_end];
        let end_at = events[ending].when.end();

        match by_start.get(next_start) {
            Some(&starting) if events[starting].when.start() < end_at => {
                let event = &events[starting];
                if event.attends_any(&request.required) {
                    if blocking.is_empty() {
                        push_if_fits(&mut windows, window_start, event.when.start(), duration);
                    }
                    blocking.insert(starting);
                }
                next_start += 1;
            }
            _ => {
                if blocking.remove(&ending) && blocking.is_empty() {
                    window_start = end_at;
                }
                next_end += 1;
            }
        }
    }

    push_if_fits(&mut windows, window_start, END_OF_DAY, duration);

    debug!(
        events = events.len(),
        candidates = windows.len(),
        duration,
        "required availability scan complete"
    );
    windows
}

/// Record `[start, end)` when it is non-empty and long enough.
fn push_if_fits(windows: &mut Vec<TimeRange>, start: u32, end: u32, duration: u32) {
    if start < end && end - start >= duration {
        windows.push(TimeRange::new_unchecked(start, end));
    }
}
