//! Implementation blocks for common types.

pub mod byte_value;
pub mod custom_error;
