//! Snapshot error enumeration.

/// Hard failures while parsing the upstream snapshot document.
pub mod snapshot_error;
