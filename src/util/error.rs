//! Unified error types for NetSentry.
//!
//! All fallible operations throughout the codebase return `Result<T, NetSentryError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

/// Unified error type used throughout NetSentry.
///
/// Each variant captures enough context to produce an actionable message for
/// the user or for log output.
#[derive(Debug, thiserror::Error)]
pub enum NetSentryError {
    /// A component was constructed with an invalid parameter — e.g. a buffer
    /// capacity of zero. Construction fails fast rather than silently
    /// clamping the value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Export (CSV or JSON) failed — typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors (file writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetSentryError>;

/// Build an [`NetSentryError::InvalidConfiguration`] with the given detail.
pub fn invalid_config(detail: impl Into<String>) -> NetSentryError {
    NetSentryError::InvalidConfiguration(detail.into())
}
