use crate::ledger::enums::reset_policy::ResetPolicy;
use crate::store::structs::state_store::StateStore;

/// The ledger pass: owns its store handle, holds state only for the duration
/// of one load-mutate-save cycle.
#[derive(Debug)]
pub struct RatioLedger {
    pub store: StateStore,
    pub policy: ResetPolicy,
}
