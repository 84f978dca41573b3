use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs_utils::write_atomic;

/// Profile name assumed active before any state record has been written.
pub const DEFAULT_PROFILE: &str = "default";

/// State stored in ~/.ccswap/state.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// The currently active profile name
    pub active_profile: String,

    /// When the record was last written
    pub last_synced_at: DateTime<Utc>,
}

impl State {
    fn initial() -> Self {
        Self {
            active_profile: DEFAULT_PROFILE.to_string(),
            last_synced_at: Utc::now(),
        }
    }

    /// Read the state record.
    ///
    /// An absent file yields the lazy default (active profile "default")
    /// without creating the file; the record first hits disk on `update`.
    /// A file that exists but does not parse is an error, never silently
    /// replaced with the default.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::initial());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::fs(format!("Failed to read state file {}", path.display()), e))?;

        serde_json::from_str(&content).map_err(|e| Error::CorruptState {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply a mutation and persist the result atomically.
    ///
    /// The sole write path for the record; always refreshes `last_synced_at`.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut State),
    {
        let mut state = Self::read(path)?;
        f(&mut state);
        state.last_synced_at = Utc::now();

        let content = serde_json::to_string_pretty(&state).map_err(Error::Encode)?;
        write_atomic(path, content.as_bytes())?;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_yields_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        let state = State::read(&path).unwrap();

        assert_eq!(state.active_profile, DEFAULT_PROFILE);
        // Lazy default: reading must not create the file.
        assert!(!path.exists());
    }

    #[test]
    fn test_update_and_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        let written = State::update(&path, |s| {
            s.active_profile = "work".to_string();
        })
        .unwrap();
        assert_eq!(written.active_profile, "work");

        let read = State::read(&path).unwrap();
        assert_eq!(read.active_profile, "work");
        assert_eq!(read.last_synced_at, written.last_synced_at);
    }

    #[test]
    fn test_update_refreshes_timestamp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        let first = State::update(&path, |s| s.active_profile = "a".to_string()).unwrap();
        let second = State::update(&path, |s| s.active_profile = "b".to_string()).unwrap();

        assert!(second.last_synced_at >= first.last_synced_at);
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        State::update(&path, |s| s.active_profile = "work".to_string()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"activeProfile\""));
        assert!(raw.contains("\"lastSyncedAt\""));
    }

    #[test]
    fn test_corrupt_state_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        std::fs::write(&path, "not json {").unwrap();

        let err = State::read(&path).unwrap_err();
        assert!(matches!(err, Error::CorruptState { .. }));
    }
}
