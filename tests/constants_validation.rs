//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use netsentry::util::constants::*;

#[test]
fn buffer_capacity_is_positive() {
    assert!(DEFAULT_BUFFER_CAPACITY > 0, "DEFAULT_BUFFER_CAPACITY must be > 0");
    assert!(
        DEFAULT_BUFFER_CAPACITY <= 100_000,
        "DEFAULT_BUFFER_CAPACITY should stay display-sized"
    );
}

#[test]
fn tick_interval_is_reasonable() {
    assert!(DEFAULT_TICK_INTERVAL_MS >= 10, "Tick interval too low");
    assert!(DEFAULT_TICK_INTERVAL_MS <= 60_000, "Tick interval too high");
}

#[test]
fn suspicious_rate_is_a_probability() {
    assert!(SUSPICIOUS_RATE > 0.0, "SUSPICIOUS_RATE must be > 0");
    assert!(SUSPICIOUS_RATE < 1.0, "SUSPICIOUS_RATE must be < 1");
}

#[test]
fn channel_bound_is_positive() {
    assert!(CHANNEL_BOUND > 0, "CHANNEL_BOUND must be > 0");
}

#[test]
fn address_templates_are_consistent() {
    assert!(INTERNAL_NET_PREFIX.ends_with('.'));
    assert!(EXTERNAL_NET_PREFIX.ends_with('.'));
    assert_ne!(INTERNAL_NET_PREFIX, EXTERNAL_NET_PREFIX);
    assert!(HOST_OCTET_MIN >= 1, "Host octet 0 is the network address");
    assert!(HOST_OCTET_MAX <= 254, "Host octet 255 is broadcast");
    assert!(HOST_OCTET_MIN < HOST_OCTET_MAX);
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
}
