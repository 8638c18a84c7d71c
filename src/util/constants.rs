//! Application-wide constants for NetSentry.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Default number of events retained by an event buffer.
/// Matches the reference dashboard's "last 50 entries" feed depth. This is a
/// configurable default, not a contract — callers may size buffers as needed.
pub const DEFAULT_BUFFER_CAPACITY: usize = 50;

/// Default interval between generator ticks, in milliseconds.
/// One event per second matches the reference feed cadence. Tunable default.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Probability that a generated network event is flagged `Suspicious`
/// rather than `Normal`.
pub const SUSPICIOUS_RATE: f64 = 0.1;

/// Size of the channel used to send events from the generator thread to the
/// consumer. Bounded to apply back-pressure if the consumer falls behind.
/// 256 lets the generator run well ahead without stalling on send.
pub const CHANNEL_BOUND: usize = 256;

/// Internal address template: `192.168.1.{1..=254}`.
pub const INTERNAL_NET_PREFIX: &str = "192.168.1.";

/// External address template: `10.0.0.{1..=254}`.
pub const EXTERNAL_NET_PREFIX: &str = "10.0.0.";

/// Last-octet range for synthesized addresses (inclusive).
pub const HOST_OCTET_MIN: u8 = 1;
pub const HOST_OCTET_MAX: u8 = 254;

/// Application display name used in logs and the demo runner banner.
pub const APP_NAME: &str = "NetSentry";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
