use serde::{Deserialize, Serialize};
use crate::common::structs::byte_value::ByteValue;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BufferOverrideConfig {
    #[serde(default)]
    pub uploaded_add: ByteValue,
    #[serde(default)]
    pub downloaded_add: ByteValue,
}
