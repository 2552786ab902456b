use serde::{Deserialize, Serialize};

/// How much a detected counter decrease adds to the carry-buffer.
///
/// `lost_delta` carries exactly what the reset erased (`previous - current`),
/// so a partial decrease is not double-counted. `full_previous` carries the
/// entire previous value, the behavior of older deployments, kept selectable
/// for installations whose buffers already grew that way.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ResetPolicy {
    #[default]
    lost_delta,
    full_previous,
}
