//! Aggregation and row data structures.

/// Counters summed across all domains of one logical tracker.
pub mod raw_aggregate;

/// One output row of the ratio table.
pub mod tracker_ratio_row;
