//! Integration tests for bounded buffer retention properties.

use chrono::Utc;
use netsentry::core::buffer::EventBuffer;
use netsentry::core::event::{Event, EventKind, EventStatus, Severity};

fn make_event(id: &str) -> Event {
    Event {
        id: id.into(),
        timestamp: Utc::now(),
        severity: Severity::Info,
        status: EventStatus::Normal,
        kind: EventKind::Dns,
        category: "Network".into(),
        source: "10.0.0.7".into(),
        destination: "192.168.1.7".into(),
        message: format!("event {id}"),
        details: None,
    }
}

#[test]
fn overflow_retains_exactly_the_most_recent_capacity() {
    let capacity = 5;
    let mut buf = EventBuffer::new(capacity).expect("valid capacity");

    for i in 0..capacity * 3 {
        buf.push(make_event(&format!("e{i}")));
        assert!(buf.len() <= capacity, "len must never exceed capacity");
    }

    let snapshot = buf.all();
    assert_eq!(snapshot.len(), capacity);
    // Most-recent-first: e14, e13, e12, e11, e10
    for (offset, event) in snapshot.iter().enumerate() {
        assert_eq!(event.id, format!("e{}", capacity * 3 - 1 - offset));
    }
}

#[test]
fn clear_empties_from_any_prior_state() {
    let mut buf = EventBuffer::new(3).expect("valid capacity");
    buf.clear();
    assert!(buf.all().is_empty());

    buf.push(make_event("a"));
    buf.push(make_event("b"));
    buf.clear();
    assert!(buf.all().is_empty());
    assert_eq!(buf.len(), 0);
}

#[test]
fn push_then_read_roundtrips_every_field() {
    let original = Event {
        id: "evt-roundtrip".into(),
        timestamp: Utc::now(),
        severity: Severity::High,
        status: EventStatus::Investigating,
        kind: EventKind::Alert,
        category: "Network Attack".into(),
        source: "Network Monitor".into(),
        destination: "FW-01".into(),
        message: "DDoS Attack Pattern".into(),
        details: Some("Unusual traffic volume".into()),
    };

    let mut buf = EventBuffer::new(10).expect("valid capacity");
    buf.push(original.clone());
    assert_eq!(buf.all()[0], original);
}

#[test]
fn capacity_one_keeps_only_the_newest() {
    let mut buf = EventBuffer::new(1).expect("valid capacity");
    buf.push(make_event("old"));
    buf.push(make_event("new"));
    let snapshot = buf.all();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "new");
}

#[test]
fn default_feed_depth_is_constructible() {
    use netsentry::util::constants::DEFAULT_BUFFER_CAPACITY;
    let buf = EventBuffer::new(DEFAULT_BUFFER_CAPACITY).expect("default depth must be valid");
    assert_eq!(buf.capacity(), DEFAULT_BUFFER_CAPACITY);
}

#[test]
fn zero_capacity_fails_fast() {
    let err = EventBuffer::new(0).expect_err("zero capacity must be rejected");
    assert!(
        err.to_string().contains("Invalid configuration"),
        "unexpected error: {err}"
    );
}
