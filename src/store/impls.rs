//! Implementation blocks for state load/save.

pub mod state_store;
