//! Synthetic event generation.
//!
//! [`EventGenerator`] produces one [`Event`] per tick from a per-domain
//! template catalog. Generation can run on a background schedule: `start`
//! spawns a named thread driven by [`crossbeam_channel::tick`] that sends
//! each event to the caller's channel, and `stop` cancels the schedule and
//! joins the thread. The generator never touches a buffer itself — the
//! caller wires its output wherever it belongs, which keeps generation and
//! retention independently testable.
//!
//! Randomness and time are injected ([`rand::Rng`], [`Clock`]) so tests can
//! drive the generator deterministically with a seeded RNG and fixed clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::event::{Event, EventKind, EventStatus, Severity};
use crate::util::constants::{
    EXTERNAL_NET_PREFIX, HOST_OCTET_MAX, HOST_OCTET_MIN, INTERNAL_NET_PREFIX, SUSPICIOUS_RATE,
};
use crate::util::time::{Clock, SystemClock};

/// Which dashboard feed this generator simulates. Each profile draws from
/// its own template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorProfile {
    /// Network activity rows: protocol, source/destination addresses, and a
    /// weighted traffic verdict.
    Network,
    /// Security log entries with level, subsystem source, and detail text.
    Logs,
    /// Alert records with severity and workflow status.
    Alerts,
}

impl GeneratorProfile {
    /// Profile name as accepted by the demo runner's `--profile` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorProfile::Network => "network",
            GeneratorProfile::Logs => "logs",
            GeneratorProfile::Alerts => "alerts",
        }
    }
}

/// Protocols drawn uniformly for network events.
const NETWORK_PROTOCOLS: &[EventKind] = &[
    EventKind::Http,
    EventKind::Https,
    EventKind::Ssh,
    EventKind::Ftp,
    EventKind::Dns,
    EventKind::Smtp,
    EventKind::Telnet,
];

/// Log templates: (level, source subsystem, category, message, details).
const LOG_CATALOG: &[(Severity, &str, &str, &str, Option<&str>)] = &[
    (
        Severity::Critical,
        "IDS-Core",
        "Security",
        "Malware signature detected in network traffic",
        Some("Signature: Trojan.Generic.KDV.123456 detected from source 192.168.1.45. Immediate action required to quarantine affected system."),
    ),
    (
        Severity::Warning,
        "Auth-Service",
        "Authentication",
        "Multiple failed login attempts",
        Some("User: admin, Source IP: 10.0.0.15, Attempts: 5. Account temporarily locked for security."),
    ),
    (
        Severity::Error,
        "Network-Monitor",
        "Network",
        "DDoS attack pattern detected",
        Some("Traffic volume exceeded threshold by 300% from external sources. Firewall rules automatically updated."),
    ),
    (
        Severity::Info,
        "System-Monitor",
        "System",
        "Security scan completed successfully",
        Some("Full system scan completed in 45 minutes, 0 threats found."),
    ),
    (
        Severity::Warning,
        "Firewall",
        "Network",
        "Port scan activity detected",
        Some("Sequential port scanning from 203.0.113.5 targeting ports 22, 80, 443, 8080. Source IP blocked for 24 hours."),
    ),
    (
        Severity::Info,
        "Auth-Service",
        "Authentication",
        "User session established",
        None,
    ),
    (
        Severity::Error,
        "IDS-Core",
        "System",
        "Database connection timeout",
        Some("Failed to connect to threat intelligence database after 30 seconds."),
    ),
    (
        Severity::Critical,
        "Network-Monitor",
        "Security",
        "Suspicious data exfiltration detected",
        Some("Large volume of sensitive data transferred to external IP 198.51.100.25."),
    ),
];

/// Alert templates: (severity, source system, category, title, description).
const ALERT_CATALOG: &[(Severity, &str, &str, &str, &str)] = &[
    (
        Severity::Critical,
        "Endpoint Protection",
        "Malware",
        "Malware Detected",
        "Trojan.Generic.KDV.123456 detected in network traffic from workstation WS-001",
    ),
    (
        Severity::High,
        "Authentication System",
        "Authentication",
        "Suspicious Login Activity",
        "Multiple failed login attempts detected from external IP address",
    ),
    (
        Severity::High,
        "Network Monitor",
        "Network Attack",
        "DDoS Attack Pattern",
        "Unusual traffic volume detected from multiple external sources",
    ),
    (
        Severity::Medium,
        "Intrusion Detection",
        "Reconnaissance",
        "Port Scan Detected",
        "Sequential port scanning activity targeting web servers",
    ),
    (
        Severity::Medium,
        "Host Monitor",
        "Privilege Escalation",
        "Privilege Escalation Attempt",
        "Unauthorized attempt to gain administrative privileges detected",
    ),
];

/// Generation state shared between direct `tick` calls and the background
/// schedule. A single RNG stream and sequence counter serve both, so event
/// ids stay unique however events are produced.
struct GenCore<R, C> {
    profile: GeneratorProfile,
    rng: R,
    clock: C,
    last_timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl<R: Rng, C: Clock> GenCore<R, C> {
    fn tick(&mut self, seq: &AtomicU64) -> Event {
        let id = format!("evt-{}", seq.fetch_add(1, Ordering::Relaxed));

        // Timestamps are non-decreasing in generation order even if the wall
        // clock steps backwards between ticks.
        let now = self.clock.now();
        let timestamp = match self.last_timestamp {
            Some(last) if now < last => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);

        match self.profile {
            GeneratorProfile::Network => {
                let kind = NETWORK_PROTOCOLS[self.rng.gen_range(0..NETWORK_PROTOCOLS.len())];
                let source = self.random_address(EXTERNAL_NET_PREFIX);
                let destination = self.random_address(INTERNAL_NET_PREFIX);
                let status = if self.rng.gen_bool(SUSPICIOUS_RATE) {
                    EventStatus::Suspicious
                } else {
                    EventStatus::Normal
                };
                Event {
                    id,
                    timestamp,
                    severity: Severity::Info,
                    status,
                    kind,
                    category: "Network".into(),
                    message: format!("{kind} traffic {source} -> {destination}"),
                    source,
                    destination,
                    details: None,
                }
            }
            GeneratorProfile::Logs => {
                let (severity, source, category, message, details) =
                    LOG_CATALOG[self.rng.gen_range(0..LOG_CATALOG.len())];
                Event {
                    id,
                    timestamp,
                    severity,
                    status: EventStatus::Normal,
                    kind: EventKind::Log,
                    category: category.into(),
                    source: source.into(),
                    destination: String::new(),
                    message: message.into(),
                    details: details.map(str::to_owned),
                }
            }
            GeneratorProfile::Alerts => {
                let (severity, source, category, title, description) =
                    ALERT_CATALOG[self.rng.gen_range(0..ALERT_CATALOG.len())];
                let status = match self.rng.gen_range(0..4) {
                    0 | 1 => EventStatus::Active,
                    2 => EventStatus::Investigating,
                    _ => EventStatus::Resolved,
                };
                Event {
                    id,
                    timestamp,
                    severity,
                    status,
                    kind: EventKind::Alert,
                    category: category.into(),
                    source: source.into(),
                    destination: String::new(),
                    message: title.into(),
                    details: Some(description.into()),
                }
            }
        }
    }

    /// Synthesize an address from a fixed `/24` template, e.g. `10.0.0.37`.
    fn random_address(&mut self, prefix: &str) -> String {
        let octet = self.rng.gen_range(HOST_OCTET_MIN..=HOST_OCTET_MAX);
        format!("{prefix}{octet}")
    }
}

/// Handle to a running background schedule. Dropping the cancel sender makes
/// the schedule thread's `select!` wake immediately.
struct ScheduleHandle {
    cancel: Sender<()>,
    join: std::thread::JoinHandle<()>,
}

/// Produces synthetic events, either on demand via [`tick`](Self::tick) or
/// on a periodic background schedule via [`start`](Self::start).
///
/// Two states: stopped and running. `start` while running replaces the
/// existing schedule; at most one schedule is ever live. `stop` is
/// idempotent and guarantees no event is sent after it returns.
pub struct EventGenerator<R = StdRng, C = SystemClock> {
    core: Arc<Mutex<GenCore<R, C>>>,
    seq: Arc<AtomicU64>,
    schedule: Option<ScheduleHandle>,
}

impl EventGenerator<StdRng, SystemClock> {
    /// Generator with an entropy-seeded RNG and the system clock.
    pub fn new(profile: GeneratorProfile) -> Self {
        Self::with_parts(profile, StdRng::from_entropy(), SystemClock)
    }

    /// Generator with a deterministic RNG seed and the system clock.
    pub fn seeded(profile: GeneratorProfile, seed: u64) -> Self {
        Self::with_parts(profile, StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R: Rng + Send + 'static, C: Clock + 'static> EventGenerator<R, C> {
    /// Generator with fully injected randomness and clock.
    pub fn with_parts(profile: GeneratorProfile, rng: R, clock: C) -> Self {
        Self {
            core: Arc::new(Mutex::new(GenCore {
                profile,
                rng,
                clock,
                last_timestamp: None,
            })),
            seq: Arc::new(AtomicU64::new(0)),
            schedule: None,
        }
    }

    /// Produce exactly one event.
    pub fn tick(&mut self) -> Event {
        self.core
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tick(&self.seq)
    }

    /// Begin periodic generation, sending one event per `interval` to
    /// `sender`. Any existing schedule is cancelled first, so at most one
    /// schedule is live at a time.
    pub fn start(&mut self, interval: Duration, sender: Sender<Event>) {
        self.stop();

        let (cancel_tx, cancel_rx) = crossbeam_channel::bounded::<()>(1);
        let core = Arc::clone(&self.core);
        let seq = Arc::clone(&self.seq);

        let join = std::thread::Builder::new()
            .name("event-generator".into())
            .spawn(move || {
                schedule_thread_main(core, seq, interval, sender, cancel_rx);
            })
            .expect("failed to spawn event generator thread");

        self.schedule = Some(ScheduleHandle {
            cancel: cancel_tx,
            join,
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "schedule started");
    }

    /// Cancel the background schedule, if any, and wait for its thread to
    /// finish. Idempotent. After this returns no further events are sent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.schedule.take() {
            drop(handle.cancel);
            if handle.join.join().is_err() {
                tracing::warn!("event generator thread panicked");
            }
            tracing::debug!("schedule stopped");
        }
    }

    /// `true` while a background schedule is live.
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }
}

impl<R, C> Drop for EventGenerator<R, C> {
    fn drop(&mut self) {
        if let Some(handle) = self.schedule.take() {
            drop(handle.cancel);
            let _ = handle.join.join();
        }
    }
}

/// Main loop of the schedule thread. Waits on the ticker, produces one event
/// per tick, and exits as soon as the cancel channel disconnects or the
/// consumer goes away.
fn schedule_thread_main<R: Rng, C: Clock>(
    core: Arc<Mutex<GenCore<R, C>>>,
    seq: Arc<AtomicU64>,
    interval: Duration,
    sender: Sender<Event>,
    cancel: crossbeam_channel::Receiver<()>,
) {
    let start = Instant::now();
    let ticker = crossbeam_channel::tick(interval);
    let mut produced = 0usize;

    loop {
        crossbeam_channel::select! {
            recv(ticker) -> _ => {
                let event = core
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .tick(&seq);
                crossbeam_channel::select! {
                    send(sender, event) -> res => {
                        if res.is_err() {
                            tracing::debug!("consumer disconnected, stopping schedule");
                            break;
                        }
                        produced += 1;
                    }
                    recv(cancel) -> _ => break,
                }
            }
            recv(cancel) -> _ => break,
        }
    }

    tracing::info!(
        produced,
        elapsed = %crate::util::time::format_duration(start.elapsed()),
        "schedule thread exiting"
    );
}
