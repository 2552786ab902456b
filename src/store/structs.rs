//! Store data structures.

/// File-backed ledger state store with an owned write lock.
pub mod state_store;
