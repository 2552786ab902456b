//! Persistence adapter for the ledger state document.
//!
//! Load never fails: a missing, unreadable, or corrupt document yields the
//! empty state and every tracker re-baselines on its next observation, one
//! transient under-count that heals itself. Save is guarded by the store's own
//! mutex so parallel requests cannot interleave writes; last writer wins.

/// Store data structures.
pub mod structs;

/// Implementation blocks for state load/save.
pub mod impls;
