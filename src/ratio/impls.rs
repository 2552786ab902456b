//! Implementation blocks for aggregation and row computation.

pub mod raw_aggregate;
pub mod tracker_ratio_row;
