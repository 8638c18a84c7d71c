//! Integration tests for NetSentry.
//!
//! These tests exercise the public library surface: buffer retention,
//! filtering, the generator schedule, export, and error types. They run as
//! part of `cargo test` with no external dependencies.

mod buffer_properties;
mod constants_validation;
mod generator_schedule;
