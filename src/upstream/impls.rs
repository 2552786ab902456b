//! Implementation blocks for snapshot parsing.

pub mod torrents_summary;
