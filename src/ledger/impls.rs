//! Implementation blocks for ledger transitions.

pub mod ratio_ledger;
pub mod tracker_ledger_entry;
