//! CSV export for filtered events.
//!
//! Writes a filtered feed snapshot to a CSV file with standard columns.

use std::path::Path;

use crate::core::event::Event;
use crate::util::error::NetSentryError;
use crate::util::time::format_table_timestamp;

/// Pre-flight check that `path` can plausibly be written.
///
/// Verifies the parent directory exists so export failures surface before
/// any file is created.
pub fn validate_export_path(path: &Path) -> Result<(), NetSentryError> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(()),
        Some(parent) if parent.exists() => Ok(()),
        Some(parent) => Err(NetSentryError::Export(format!(
            "directory does not exist: {}",
            parent.display()
        ))),
        None => Err(NetSentryError::Export(format!(
            "path has no parent directory: {}",
            path.display()
        ))),
    }
}

/// Export the given events to a CSV file at `path`.
///
/// Columns: Timestamp, Severity, Status, Kind, Source, Destination,
/// Category, Message.
///
/// # Errors
/// Returns [`NetSentryError::Export`] if the file cannot be created or written.
pub fn export_csv(events: &[Event], path: &Path) -> Result<(), NetSentryError> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| NetSentryError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record([
            "Timestamp",
            "Severity",
            "Status",
            "Kind",
            "Source",
            "Destination",
            "Category",
            "Message",
        ])
        .map_err(|e| NetSentryError::Export(format!("Failed to write CSV header: {e}")))?;

    for event in events {
        let timestamp = format_table_timestamp(&event.timestamp);
        writer
            .write_record([
                timestamp.as_str(),
                event.severity.as_str(),
                event.status.as_str(),
                event.kind.as_str(),
                event.source.as_str(),
                event.destination.as_str(),
                event.category.as_str(),
                event.display_message(),
            ])
            .map_err(|e| NetSentryError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| NetSentryError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!("Exported {} events to CSV: {}", events.len(), path.display());
    Ok(())
}
