/// A static manual correction merged into a tracker's raw counters, e.g.
/// historical credit from before the counter source existed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferOverride {
    pub uploaded_add: i64,
    pub downloaded_add: i64,
}
