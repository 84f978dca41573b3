use directories::BaseDirs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// All computed paths used by ccswap
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~/.ccswap
    pub base_dir: PathBuf,
    /// ~/.ccswap/profiles
    pub profiles_dir: PathBuf,
    /// ~/.ccswap/state.json
    pub state_file: PathBuf,
    /// ~/.claude/settings.json
    pub live_settings: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or(Error::NoHomeDir)?;
        let home = base_dirs.home_dir();

        let base_dir = home.join(".ccswap");
        let profiles_dir = base_dir.join("profiles");
        let state_file = base_dir.join("state.json");
        let live_settings = home.join(".claude").join("settings.json");

        Ok(Self {
            base_dir,
            profiles_dir,
            state_file,
            live_settings,
        })
    }

    /// Get the directory holding a profile's files.
    ///
    /// Deterministic: the directory is named exactly as the profile, so two
    /// valid names never collide. Callers must validate `name` first.
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(name)
    }

    /// Get the path to a profile's stored settings blob.
    pub fn profile_settings(&self, name: &str) -> PathBuf {
        self.profile_dir(name).join("settings.json")
    }

    /// Ensure the store root exists.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.profiles_dir).map_err(|e| {
            Error::fs(
                format!(
                    "Failed to create profiles directory {}",
                    self.profiles_dir.display()
                ),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_paths_layout() {
        let temp = TempDir::new().unwrap();
        unsafe { std::env::set_var("HOME", temp.path()) };

        let paths = Paths::new().unwrap();
        assert!(paths.profiles_dir.ends_with(".ccswap/profiles"));
        assert!(paths.state_file.ends_with(".ccswap/state.json"));
        assert!(paths.live_settings.ends_with(".claude/settings.json"));
    }

    #[test]
    #[serial]
    fn test_profile_settings_path() {
        let temp = TempDir::new().unwrap();
        unsafe { std::env::set_var("HOME", temp.path()) };

        let paths = Paths::new().unwrap();
        let profile_path = paths.profile_settings("work");
        assert!(profile_path.ends_with("profiles/work/settings.json"));
    }

    #[test]
    fn test_profile_dirs_are_distinct() {
        let temp = TempDir::new().unwrap();
        let paths = crate::test_utils::setup_test_paths(&temp);

        let names = ["work", "work2", "Work", "w-ork", "w_ork"];
        for a in names {
            for b in names {
                if a != b {
                    assert_ne!(paths.profile_dir(a), paths.profile_dir(b));
                }
            }
        }
    }
}
