//! Tests for building and deserializing meeting requests.

use meeting_resolver::MeetingRequest;

#[test]
fn add_optional_attendee_ignores_duplicates() {
    let mut request = MeetingRequest::new(["ann"], 30);
    assert!(!request.has_optional());

    request.add_optional_attendee("bob");
    request.add_optional_attendee("bob");
    request.add_optional_attendee("cat");

    assert_eq!(request.optional.len(), 2);
    assert!(request.optional.contains("bob"));
    assert!(request.has_required());
}

#[test]
fn optional_attendee_may_also_be_required() {
    let mut request = MeetingRequest::new(["ann"], 30);
    request.add_optional_attendee("ann");

    assert!(request.required.contains("ann"));
    assert!(request.optional.contains("ann"));
}

#[test]
fn deserialize_accepts_long_field_names() {
    let json = r#"{"duration":45,"required_attendees":["ann"],"optional_attendees":["bob"]}"#;
    let request: MeetingRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.duration, 45);
    assert!(request.required.contains("ann"));
    assert!(request.optional.contains("bob"));
}

#[test]
fn deserialize_defaults_missing_attendee_sets() {
    let request: MeetingRequest = serde_json::from_str(r#"{"duration":30}"#).unwrap();
    assert!(!request.has_required());
    assert!(!request.has_optional());
}
