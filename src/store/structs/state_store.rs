use std::path::PathBuf;
use parking_lot::Mutex;

/// File-backed store for the ledger state document. The lock serializes the
/// read-modify-write window of concurrent save calls; loads intentionally run
/// unguarded and may observe a state one save behind.
#[derive(Debug, Default)]
pub struct StateStore {
    pub path: PathBuf,
    pub(crate) lock: Mutex<()>,
}
