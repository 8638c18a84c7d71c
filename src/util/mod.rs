//! Shared utilities: constants, error types, and time helpers.

pub mod constants;
pub mod error;
pub mod time;
