//! Reset policy enumeration.

/// How much a detected counter decrease adds to the carry-buffer.
pub mod reset_policy;
