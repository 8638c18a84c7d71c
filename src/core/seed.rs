//! Static seed events used to pre-populate feeds at startup.
//!
//! Content mirrors the dashboard's sample logs and alerts so a freshly
//! started view is not empty before the generator's first tick. All seed
//! timestamps fall on the same sample day; ids use a `seed-` prefix so they
//! never collide with generator-assigned `evt-` ids.

use chrono::{DateTime, TimeZone, Utc};

use crate::core::event::{Event, EventKind, EventStatus, Severity};

/// Timestamp on the fixed sample day (2024-01-15).
fn sample_time(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, second)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Seed entries for the Logs view, newest first.
pub fn seed_logs() -> Vec<Event> {
    let entries: [(u32, u32, u32, Severity, &str, &str, &str, Option<&str>); 8] = [
        (
            14, 32, 15,
            Severity::Critical,
            "IDS-Core",
            "Security",
            "Malware signature detected in network traffic",
            Some("Signature: Trojan.Generic.KDV.123456 detected from source 192.168.1.45. Immediate action required to quarantine affected system."),
        ),
        (
            14, 31, 42,
            Severity::Warning,
            "Auth-Service",
            "Authentication",
            "Multiple failed login attempts",
            Some("User: admin, Source IP: 10.0.0.15, Attempts: 5. Account temporarily locked for security."),
        ),
        (
            14, 30, 18,
            Severity::Error,
            "Network-Monitor",
            "Network",
            "DDoS attack pattern detected",
            Some("Traffic volume exceeded threshold by 300% from external sources. Firewall rules automatically updated."),
        ),
        (
            14, 29, 33,
            Severity::Info,
            "System-Monitor",
            "System",
            "Security scan completed successfully",
            Some("Full system scan completed in 45 minutes, 0 threats found. Next scan scheduled for 2024-01-16 02:00:00."),
        ),
        (
            14, 28, 7,
            Severity::Warning,
            "Firewall",
            "Network",
            "Port scan activity detected",
            Some("Sequential port scanning from 203.0.113.5 targeting ports 22, 80, 443, 8080. Source IP blocked for 24 hours."),
        ),
        (
            14, 25, 15,
            Severity::Info,
            "Auth-Service",
            "Authentication",
            "User session established",
            Some("User: johndoe successfully authenticated from 192.168.1.100. Session ID: sess_abc123def456."),
        ),
        (
            14, 20, 42,
            Severity::Error,
            "IDS-Core",
            "System",
            "Database connection timeout",
            Some("Failed to connect to threat intelligence database after 30 seconds. Retrying connection..."),
        ),
        (
            14, 18, 25,
            Severity::Critical,
            "Network-Monitor",
            "Security",
            "Suspicious data exfiltration detected",
            Some("Large volume of sensitive data transferred to external IP 198.51.100.25. Investigation required immediately."),
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(
            |(i, &(h, m, s, severity, source, category, message, details))| Event {
                id: format!("seed-log-{}", i + 1),
                timestamp: sample_time(h, m, s),
                severity,
                status: EventStatus::Normal,
                kind: EventKind::Log,
                category: category.into(),
                source: source.into(),
                destination: String::new(),
                message: message.into(),
                details: details.map(str::to_owned),
            },
        )
        .collect()
}

/// Seed entries for the Alerts view, newest first.
pub fn seed_alerts() -> Vec<Event> {
    let entries: [(u32, u32, u32, Severity, EventStatus, &str, &str, &str, &str); 5] = [
        (
            14, 32, 15,
            Severity::Critical,
            EventStatus::Active,
            "Endpoint Protection",
            "Malware",
            "Malware Detected",
            "Trojan.Generic.KDV.123456 detected in network traffic from workstation WS-001",
        ),
        (
            14, 25, 42,
            Severity::High,
            EventStatus::Investigating,
            "Authentication System",
            "Authentication",
            "Suspicious Login Activity",
            "Multiple failed login attempts detected from external IP address",
        ),
        (
            14, 18, 33,
            Severity::High,
            EventStatus::Active,
            "Network Monitor",
            "Network Attack",
            "DDoS Attack Pattern",
            "Unusual traffic volume detected from multiple external sources",
        ),
        (
            14, 10, 22,
            Severity::Medium,
            EventStatus::Resolved,
            "Intrusion Detection",
            "Reconnaissance",
            "Port Scan Detected",
            "Sequential port scanning activity targeting web servers",
        ),
        (
            13, 58, 17,
            Severity::Medium,
            EventStatus::Active,
            "Host Monitor",
            "Privilege Escalation",
            "Privilege Escalation Attempt",
            "Unauthorized attempt to gain administrative privileges detected",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(
            |(i, &(h, m, s, severity, status, source, category, title, description))| Event {
                id: format!("seed-alert-{}", i + 1),
                timestamp: sample_time(h, m, s),
                severity,
                status,
                kind: EventKind::Alert,
                category: category.into(),
                source: source.into(),
                destination: String::new(),
                message: title.into(),
                details: Some(description.into()),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<String> = seed_logs()
            .into_iter()
            .chain(seed_alerts())
            .map(|e| e.id)
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_seeds_are_newest_first() {
        for set in [seed_logs(), seed_alerts()] {
            for pair in set.windows(2) {
                assert!(pair[0].timestamp >= pair[1].timestamp);
            }
        }
    }

    #[test]
    fn test_seed_logs_carry_details() {
        assert!(seed_logs().iter().all(|e| e.details.is_some()));
    }
}
