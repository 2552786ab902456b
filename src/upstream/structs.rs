//! Snapshot data structures.

/// Raw transfer counters for one announce domain.
pub mod tracker_domain_stats;

/// The `counts` section of the snapshot document.
pub mod transfer_counts;

/// Root of the snapshot document.
pub mod torrents_summary;
