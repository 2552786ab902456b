//! Ledger state data structures.

/// Durable root document holding one entry per logical tracker key.
pub mod ledger_state;

/// Per-tracker previous values and carry-buffers.
pub mod tracker_ledger_entry;

/// The ledger pass over computed rows.
pub mod ratio_ledger;
