//! Tests for `TimeRange` construction, comparison, and the day constants.

use std::cmp::Ordering;

use meeting_resolver::time_range::{order_by_end, order_by_start};
use meeting_resolver::{ResolverError, TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_1440_minutes() {
    assert_eq!(WHOLE_DAY.start(), START_OF_DAY);
    assert_eq!(WHOLE_DAY.end(), END_OF_DAY);
    assert_eq!(WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_end_is_stored_exclusive() {
    let r = TimeRange::from_start_end(540, 599, true).unwrap();
    assert_eq!(r.end(), 600);
    assert_eq!(r.duration(), 60);
}

#[test]
fn inclusive_last_minute_reaches_end_of_day() {
    let r = TimeRange::from_start_end(0, END_OF_DAY - 1, true).unwrap();
    assert_eq!(r, WHOLE_DAY);
}

#[test]
fn end_past_day_rejected() {
    let err = TimeRange::from_start_end(0, 1441, false).unwrap_err();
    assert_eq!(err, ResolverError::InvalidRange { start: 0, end: 1441 });
    assert!(TimeRange::from_start_end(0, END_OF_DAY, true).is_err());
}

#[test]
fn start_after_end_rejected() {
    assert!(TimeRange::from_start_end(600, 540, false).is_err());
}

#[test]
fn from_start_duration_matches_from_start_end() {
    assert_eq!(TimeRange::from_start_duration(540, 30).unwrap(), range(540, 570));
    assert!(TimeRange::from_start_duration(1430, 30).is_err());
    assert!(TimeRange::from_start_duration(10, u32::MAX).is_err());
}

#[test]
fn empty_range_is_allowed() {
    let r = range(600, 600);
    assert!(r.is_empty());
    assert_eq!(r.duration(), 0);
}

// ── Containment and overlap ─────────────────────────────────────────────────

#[test]
fn contains_point_is_half_open() {
    let r = range(540, 600);
    assert!(r.contains_point(540));
    assert!(r.contains_point(599));
    assert!(!r.contains_point(600));
    assert!(!r.contains_point(539));
}

#[test]
fn contains_range_checks_both_endpoints() {
    let outer = range(480, 720);
    assert!(outer.contains(&range(480, 720)));
    assert!(outer.contains(&range(500, 600)));
    assert!(!outer.contains(&range(470, 600)));
    assert!(!outer.contains(&range(600, 730)));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    assert!(!range(480, 540).overlaps(&range(540, 600)));
    assert!(!range(540, 600).overlaps(&range(480, 540)));
}

#[test]
fn nested_and_partial_ranges_overlap() {
    assert!(range(480, 600).overlaps(&range(500, 520)));
    assert!(range(500, 520).overlaps(&range(480, 600)));
    assert!(range(480, 540).overlaps(&range(530, 600)));
}

#[test]
fn empty_range_overlaps_nothing() {
    assert!(!range(500, 500).overlaps(&range(480, 600)));
}

#[test]
fn intersection_of_overlapping_ranges() {
    assert_eq!(range(480, 600).intersection(&range(540, 720)), Some(range(540, 600)));
    assert_eq!(range(480, 540).intersection(&range(540, 600)), None);
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn natural_order_is_start_then_end() {
    let mut ranges = vec![range(60, 120), range(0, 90), range(0, 30)];
    ranges.sort();
    assert_eq!(ranges, vec![range(0, 30), range(0, 90), range(60, 120)]);
}

#[test]
fn comparators_break_ties_on_other_bound() {
    assert_eq!(order_by_start(&range(0, 30), &range(0, 60)), Ordering::Less);
    assert_eq!(order_by_end(&range(10, 60), &range(0, 60)), Ordering::Greater);
    assert_eq!(order_by_end(&range(0, 30), &range(20, 60)), Ordering::Less);
}

// ── Formatting and serde ────────────────────────────────────────────────────

#[test]
fn display_as_clock_times() {
    assert_eq!(range(545, 1440).to_string(), "09:05-24:00");
}

#[test]
fn deserialize_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":60,"end":120}"#).unwrap();
    assert_eq!(ok, range(60, 120));

    let bad = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#);
    assert!(bad.is_err());
}

#[test]
fn serialize_as_start_end_object() {
    let json = serde_json::to_string(&range(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":120}"#);
}
