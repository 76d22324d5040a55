//! Durable key-value persistence for ledger state.
//!
//! The store mirrors the host web view's storage: string keys to string
//! values. `user_stars` holds the balance as a decimal string and
//! `user_stats` the statistics record as JSON. Reads fall back to defaults on
//! missing or corrupt values; writes are best-effort and never block play.

use starcade_types::{LedgerState, PlayerStats, BALANCE_KEY, STARTING_BALANCE, STATS_KEY};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encode: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Default)]
pub struct Memory {
    state: HashMap<String, String>,
}

impl Store for Memory {
    fn get(&self, key: &str) -> Option<String> {
        self.state.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}

/// One file per key under a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Load ledger state, substituting defaults for anything missing or corrupt.
/// A broken record never surfaces to the caller.
pub fn load_ledger(store: &impl Store) -> LedgerState {
    let balance = match store.get(BALANCE_KEY) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(balance) => balance,
            Err(err) => {
                warn!(%err, "corrupt balance record, using default");
                STARTING_BALANCE
            }
        },
        None => STARTING_BALANCE,
    };
    let stats = match store.get(STATS_KEY) {
        Some(raw) => match serde_json::from_str::<PlayerStats>(&raw) {
            Ok(stats) => stats,
            Err(err) => {
                warn!(%err, "corrupt stats record, using defaults");
                PlayerStats::default()
            }
        },
        None => PlayerStats::default(),
    };
    LedgerState { balance, stats }
}

/// Persist ledger state. Best-effort: failures are logged and swallowed so a
/// storage fault never aborts a play. The in-memory state stays valid.
pub fn save_ledger(store: &mut impl Store, state: &LedgerState) {
    if let Err(err) = try_save(store, state) {
        warn!(%err, "failed to persist ledger state");
    }
}

fn try_save(store: &mut impl Store, state: &LedgerState) -> Result<(), StoreError> {
    store.set(BALANCE_KEY, state.balance.to_string())?;
    store.set(STATS_KEY, serde_json::to_string(&state.stats)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail.
    struct Broken;

    impl Store for Broken {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )))
        }
    }

    #[test]
    fn test_roundtrip_through_memory() {
        let mut store = Memory::default();
        let mut state = LedgerState::default();
        state.balance = 240;
        state.stats.games_played = 6;
        state.stats.games_won = 2;
        state.stats.total_won = 180;
        state.stats.total_lost = 40;

        save_ledger(&mut store, &state);
        assert_eq!(load_ledger(&store), state);
    }

    #[test]
    fn test_missing_values_load_defaults() {
        let store = Memory::default();
        assert_eq!(load_ledger(&store), LedgerState::default());
    }

    #[test]
    fn test_corrupt_values_load_defaults() {
        let mut store = Memory::default();
        store.set(BALANCE_KEY, "not a number".to_string()).unwrap();
        store.set(STATS_KEY, "{broken".to_string()).unwrap();
        assert_eq!(load_ledger(&store), LedgerState::default());
    }

    #[test]
    fn test_corrupt_balance_keeps_valid_stats() {
        let mut store = Memory::default();
        store.set(BALANCE_KEY, "-5".to_string()).unwrap();
        store
            .set(STATS_KEY, r#"{"gamesPlayed":3}"#.to_string())
            .unwrap();

        let state = load_ledger(&store);
        assert_eq!(state.balance, STARTING_BALANCE);
        assert_eq!(state.stats.games_played, 3);
    }

    #[test]
    fn test_balance_stored_as_decimal_string() {
        let mut store = Memory::default();
        let mut state = LedgerState::default();
        state.balance = 1234;
        save_ledger(&mut store, &state);
        assert_eq!(store.get(BALANCE_KEY).as_deref(), Some("1234"));
    }

    #[test]
    fn test_save_swallows_write_failures() {
        let mut store = Broken;
        // Must not panic or propagate.
        save_ledger(&mut store, &LedgerState::default());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();

        let mut state = LedgerState::default();
        state.balance = 77;
        state.stats.games_played = 2;
        save_ledger(&mut store, &state);

        // A fresh handle over the same directory sees the same state.
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(load_ledger(&reopened), state);
    }
}
