//! Half-open ranges of minutes within a single day.
//!
//! A [`TimeRange`] covers `[start, end)` where both bounds are minutes from
//! midnight and `0 <= start <= end <= END_OF_DAY`. A range with `start == end`
//! is empty: it contains no minute and overlaps nothing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ResolverError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day (24 * 60 minutes).
pub const END_OF_DAY: u32 = 24 * 60;

/// The range covering the entire day.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: END_OF_DAY,
};

/// An immutable half-open interval of minutes-of-day.
///
/// Ordering is by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire form; converted through [`TimeRange::from_start_end`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ResolverError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// Build a range from its bounds.
    ///
    /// When `inclusive` is true, the `end` minute itself belongs to the range, so
    /// the stored exclusive end is `end + 1`.
    ///
    /// # Errors
    /// Returns `ResolverError::InvalidRange` if the resulting bounds do not satisfy
    /// `0 <= start <= end <= END_OF_DAY`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let exclusive_end = if inclusive { end.checked_add(1) } else { Some(end) };
        match exclusive_end {
            Some(end) if start <= end && end <= END_OF_DAY => Ok(Self { start, end }),
            _ => Err(ResolverError::InvalidRange { start, end }),
        }
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    ///
    /// # Errors
    /// Returns `ResolverError::InvalidRange` if the range would run past the end
    /// of the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(ResolverError::InvalidRange { start, end: u32::MAX })?;
        Self::from_start_end(start, end, false)
    }

    /// Bounds already known to satisfy the invariant.
    pub(crate) fn new_unchecked(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= END_OF_DAY);
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether both endpoints of `other` lie within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Two ranges overlap when they share at least one minute.
    ///
    /// Adjacent ranges (`a.end == b.start`) and empty ranges never overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The shared part of two ranges, or `None` when they do not overlap.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new_unchecked(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }
}

/// Order by start time; ranges sharing a start are ordered by end ascending.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start).then(a.end.cmp(&b.end))
}

/// Order by end time; ranges sharing an end are ordered by start ascending.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end).then(a.start.cmp(&b.start))
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
