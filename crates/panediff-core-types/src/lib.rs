//! Core types shared across panediff facilities
//!
//! This crate holds the canonical structured-logging schema: field keys and
//! event names used by the logging macros in `panediff-core` and asserted on
//! by tests that capture log output.

pub mod schema;
