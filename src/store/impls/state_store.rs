use std::path::Path;
use log::warn;
use parking_lot::Mutex;
use crate::common::structs::custom_error::CustomError;
use crate::ledger::structs::ledger_state::LedgerState;
use crate::store::structs::state_store::StateStore;

impl StateStore {
    pub fn new(path: impl AsRef<Path>) -> StateStore {
        StateStore {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Loads the state document. Missing, unreadable, or corrupt files all
    /// yield the empty state; corruption is logged since it costs one cycle of
    /// under-counted totals while every tracker re-baselines.
    pub fn load(&self) -> LedgerState {
        match std::fs::read(&self.path) {
            Err(_) => LedgerState::default(),
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(state) => state,
                Err(e) => {
                    warn!("ledger state at {} is corrupt, starting empty: {}", self.path.display(), e);
                    LedgerState::default()
                }
            }
        }
    }

    /// Writes the state document under the store's lock, creating the parent
    /// directory when absent. Last writer wins.
    pub fn save(&self, state: &LedgerState) -> Result<(), CustomError> {
        let _guard = self.lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    return Err(CustomError::new(&format!("could not create {}: {}", parent.display(), e)));
                }
            }
        }

        let data = match serde_json::to_string_pretty(state) {
            Ok(data) => data,
            Err(e) => { return Err(CustomError::new(&format!("could not serialize ledger state: {}", e))); }
        };
        match std::fs::write(&self.path, data) {
            Ok(_) => Ok(()),
            Err(e) => Err(CustomError::new(&format!("could not write {}: {}", self.path.display(), e)))
        }
    }
}
