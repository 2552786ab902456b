use serde::{Deserialize, Serialize};

/// A byte quantity as it appears in hand-edited configuration: a raw integer,
/// a fractional number, or a string with a unit suffix such as `"10GiB"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ByteValue {
    Int(i64),
    Float(f64),
    Text(String),
}
