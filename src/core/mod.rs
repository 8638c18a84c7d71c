//! Core domain modules for NetSentry.
//!
//! Contains the event data model, the synthetic event generator and its
//! background schedule, the bounded feed buffer, in-memory filtering, and
//! the static seed data.

pub mod buffer;
pub mod event;
pub mod filter;
pub mod filter_preset;
pub mod generator;
pub mod seed;
