/// Counters summed across all physical domains mapping to one logical tracker
/// key, before buffer corrections. The member domains are kept for the
/// domain-keyed buffer override shim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAggregate {
    pub uploaded: u64,
    pub downloaded: u64,
    pub total_size: u64,
    pub count: u32,
    pub domains: Vec<String>,
}
