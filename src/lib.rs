//! NetSentry library crate.
//!
//! Re-exports the core modules so that the demo runner and integration
//! tests can access them. The binary entry point is in `main.rs`.

pub mod core;
pub mod export;
pub mod util;
