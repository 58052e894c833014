//! # meeting-resolver
//!
//! Finds the time ranges within a single day in which a meeting can be held.
//!
//! Given the day's existing events and a [`MeetingRequest`] naming required and
//! optional attendees plus a duration, the resolver returns every range where all
//! required attendees are free for at least that long, narrowed to the ranges
//! where the largest number of optional attendees can also make it. When no
//! optional attendee can join anywhere, the required-only ranges are returned.
//!
//! Times are integer minutes from midnight on one fixed day of
//! [`END_OF_DAY`] minutes. There is no timezone, recurrence, or multi-day logic.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_resolver::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(0, 60, false).unwrap(),
//!     ["ann"],
//! )];
//! let request = MeetingRequest::new(["ann"], 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots, vec![TimeRange::from_start_end(60, 1440, false).unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — half-open minute ranges and day constants
//! - [`event`] — calendar entries and attendee matching
//! - [`request`] — the meeting being scheduled
//! - [`required`] — sweep for ranges where every required attendee is free
//! - [`partition`] — sweep splitting the day by which optional attendees are free
//! - [`optimizer`] — combines both sweeps into the final slots
//! - [`query`] — the entry point tying the stages together
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod optimizer;
pub mod partition;
pub mod query;
pub mod request;
pub mod required;
pub mod time_range;

pub use error::ResolverError;
pub use event::Event;
pub use optimizer::ScoredSlot;
pub use partition::{partition_optional, AvailabilitySegment};
pub use query::{query, query_scored};
pub use request::MeetingRequest;
pub use required::required_windows;
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
