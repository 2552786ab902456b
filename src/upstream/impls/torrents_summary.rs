use serde_json::Value;
use crate::upstream::enums::snapshot_error::SnapshotError;
use crate::upstream::structs::torrents_summary::TorrentsSummary;

impl TorrentsSummary {
    /// Parses a snapshot document. Some client versions wrap the summary in a
    /// one-element list; the first element is taken, an empty list is refused.
    pub fn from_value(value: Value) -> Result<TorrentsSummary, SnapshotError> {
        let document = match value {
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(SnapshotError::Empty);
                }
                items.remove(0)
            }
            other => other,
        };
        Ok(serde_json::from_value(document)?)
    }

    pub fn from_slice(data: &[u8]) -> Result<TorrentsSummary, SnapshotError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(value)
    }
}
