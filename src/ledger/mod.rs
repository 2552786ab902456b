//! Reset-compensating ledger module.
//!
//! The torrent client's counters are not trustworthy over time: a re-added
//! tracker, a migrated client database, or a wiped session resets them, and a
//! dashboard fed raw values would watch years of upload history vanish. This
//! module converts those raw counters into cumulative totals that never
//! regress.
//!
//! # State Machine
//!
//! One [`TrackerLedgerEntry`](structs::tracker_ledger_entry::TrackerLedgerEntry)
//! per logical tracker key holds the previously observed counter pair and an
//! accumulated carry-buffer per counter. On every observation, each counter is
//! checked independently: a decrease grows the buffer by the amount lost (or by
//! the whole previous value under the compatibility policy), an increase leaves
//! it untouched. The reported value is always `current + buffer`.
//!
//! Buffers only ever grow. The ledger compensates loss, it never fabricates
//! transfer activity.
//!
//! # Persistence
//!
//! State is loaded, mutated, and saved within a single poll cycle and never
//! cached across cycles, so parallel workers drift at most one poll apart. A
//! corrupt state document resets to empty and every tracker re-baselines on
//! its next observation.

/// Reset policy enumeration.
pub mod enums;

/// Ledger state data structures.
pub mod structs;

/// Implementation blocks for ledger transitions.
pub mod impls;
