//! Canonical data structure for a single simulated security event.
//!
//! One `Event` shape backs all three dashboard feeds — network activity,
//! security logs, and alerts. Events are immutable once created: the
//! generator assigns every field at construction and nothing mutates them
//! afterwards; they leave a buffer only by eviction or an explicit clear.

use chrono::{DateTime, Utc};

/// Severity / level tag covering both feed families: alert severities
/// (`Critical`..`Low`) and log levels (`Error`, `Warning`, `Info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Human-readable display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary status tag: alert workflow states plus the traffic verdicts
/// used by the network activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventStatus {
    Active,
    Investigating,
    Resolved,
    Dismissed,
    Normal,
    Suspicious,
    Malicious,
}

impl EventStatus {
    /// Human-readable display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::Investigating => "Investigating",
            EventStatus::Resolved => "Resolved",
            EventStatus::Dismissed => "Dismissed",
            EventStatus::Normal => "Normal",
            EventStatus::Suspicious => "Suspicious",
            EventStatus::Malicious => "Malicious",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of event: one of the simulated network protocols, or a marker for
/// log / alert records whose finer classification lives in `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    Http,
    Https,
    Ssh,
    Ftp,
    Dns,
    Smtp,
    Telnet,
    Log,
    Alert,
}

impl EventKind {
    /// Display name as shown in the feed's protocol/type column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Http => "HTTP",
            EventKind::Https => "HTTPS",
            EventKind::Ssh => "SSH",
            EventKind::Ftp => "FTP",
            EventKind::Dns => "DNS",
            EventKind::Smtp => "SMTP",
            EventKind::Telnet => "TELNET",
            EventKind::Log => "LOG",
            EventKind::Alert => "ALERT",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single simulated event in a feed.
///
/// The struct is `Clone` (for buffer snapshots), `PartialEq` (for tests) and
/// serde-serialisable (for export and fixtures).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Opaque unique token assigned at creation, never reused within a
    /// buffer's lifetime.
    pub id: String,

    /// Creation timestamp in UTC. Non-decreasing in generation order.
    pub timestamp: DateTime<Utc>,

    /// Severity / level tag.
    pub severity: Severity,

    /// Workflow or traffic-verdict status.
    pub status: EventStatus,

    /// Protocol or record-family tag.
    pub kind: EventKind,

    /// Free-text classification (e.g. `"Security"`, `"Authentication"`,
    /// `"Network"`).
    pub category: String,

    /// Origin identifier — an address-like string or a subsystem name
    /// (e.g. `"10.0.0.42"`, `"IDS-Core"`).
    pub source: String,

    /// Target identifier. Empty for events without a distinct target.
    pub destination: String,

    /// Human-readable one-line summary.
    pub message: String,

    /// Optional extended text, present only for some events.
    pub details: Option<String>,
}

impl Event {
    /// Returns a one-line summary suitable for a feed row's message column.
    ///
    /// Falls back to the details text or a placeholder when `message` is
    /// empty.
    pub fn display_message(&self) -> &str {
        if !self.message.is_empty() {
            &self.message
        } else if let Some(details) = &self.details {
            details.as_str()
        } else {
            "(no message)"
        }
    }
}
