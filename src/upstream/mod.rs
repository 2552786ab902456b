//! Typed upstream snapshot structures.
//!
//! The torrent client reports a nested JSON document whose
//! `counts.trackerTransfers` table maps each announce domain to its raw
//! transfer counters. This module parses that document at the boundary into
//! fully-typed structs with a zero default for every absent field, so the rest
//! of the codebase never touches loose JSON.
//!
//! Parsing here is the one hard-failure path in the crate: a document that is
//! not valid JSON, or whose fields carry the wrong types, surfaces a
//! [`SnapshotError`](enums::snapshot_error::SnapshotError) to the caller.
//! There is no sensible default for "no data".

/// Snapshot error enumeration.
pub mod enums;

/// Snapshot data structures.
pub mod structs;

/// Implementation blocks for snapshot parsing.
pub mod impls;
