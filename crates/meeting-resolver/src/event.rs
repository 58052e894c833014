//! Calendar entries already on the day's schedule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing event: a title, when it happens, and who attends.
///
/// The title is informational only; the resolver never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub when: TimeRange,
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether anyone in `people` attends this event.
    ///
    /// Used for both required and optional attendee sets.
    pub fn attends_any(&self, people: &BTreeSet<String>) -> bool {
        // Iterate the smaller side.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}
