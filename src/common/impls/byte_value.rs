use crate::common::common::parse_bytes_str;
use crate::common::structs::byte_value::ByteValue;

impl ByteValue {
    /// Resolves the value to a byte count. Numbers truncate toward zero,
    /// strings go through [`parse_bytes_str`], which never errors.
    pub fn as_bytes(&self) -> i64 {
        match self {
            ByteValue::Int(value) => *value,
            ByteValue::Float(value) => *value as i64,
            ByteValue::Text(text) => parse_bytes_str(text),
        }
    }
}

impl Default for ByteValue {
    fn default() -> ByteValue {
        ByteValue::Int(0)
    }
}
