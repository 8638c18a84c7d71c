//! JSON export for filtered events.
//!
//! Serialises a feed snapshot as a pretty-printed JSON array using Serde.

use std::path::Path;

use crate::core::event::Event;
use crate::util::error::NetSentryError;

/// Export the given events to a JSON file at `path`.
///
/// Output is a pretty-printed JSON array of [`Event`] objects.
///
/// # Errors
/// Returns [`NetSentryError::Export`] if the file cannot be created or written.
pub fn export_json(events: &[Event], path: &Path) -> Result<(), NetSentryError> {
    let file = std::fs::File::create(path)
        .map_err(|e| NetSentryError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, events)
        .map_err(|e| NetSentryError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| NetSentryError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported {} events to JSON: {}",
        events.len(),
        path.display()
    );
    Ok(())
}
