//! The meeting being scheduled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A request for a meeting of `duration` minutes.
///
/// `required` attendees must all be free for the whole slot; `optional`
/// attendees only rank the candidate slots. The two sets may overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: u32,
    #[serde(default, alias = "required_attendees")]
    pub required: BTreeSet<String>,
    #[serde(default, alias = "optional_attendees")]
    pub optional: BTreeSet<String>,
}

impl MeetingRequest {
    /// A request with the given required attendees and no optional ones.
    pub fn new<I, S>(required: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            required: required.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
        }
    }

    /// Replace the optional attendee set.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional = optional.into_iter().map(Into::into).collect();
        self
    }

    /// Add one optional attendee. Adding someone already present is a no-op.
    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional.insert(attendee.into());
    }

    pub fn has_required(&self) -> bool {
        !self.required.is_empty()
    }

    pub fn has_optional(&self) -> bool {
        !self.optional.is_empty()
    }
}
