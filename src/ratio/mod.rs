//! Aggregation and ratio computation module.
//!
//! Takes the raw per-domain counters of one snapshot, groups them into logical
//! tracker identities via the alias table (a tracker with several mirror
//! domains shows up as several raw entries), merges static buffer overrides,
//! and produces the ordered ratio rows the presentation layer consumes.
//!
//! # Ratio Rules
//!
//! With nothing downloaded, the ratio is infinite when anything was uploaded
//! and `0.0` otherwise; in every other case it is the plain quotient. Rows
//! order ascending by ratio with infinity last, so the trackers needing
//! attention come first.

/// Aggregation and row data structures.
pub mod structs;

/// Implementation blocks for aggregation and row computation.
pub mod impls;

/// Unit tests for aggregation and ratio computation.
pub mod tests;
