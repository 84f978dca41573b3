//! Core profile management logic.
//!
//! This module handles the "data model" of profiles:
//! - Validating profile names
//! - Listing available profiles
//! - Creating, deleting, and renaming profiles
//!
//! The directory listing under `~/.ccswap/profiles/` is the authoritative set
//! of profile names; there is no separate index. Mutators re-check existence
//! on disk rather than trusting the state record.

use std::fs;
use std::io;

use crate::error::{Error, NameError, Result};
use crate::fs_utils::{read_blob, write_atomic};
use crate::paths::Paths;
use crate::providers::Provider;
use crate::state::State;

/// Names that would shadow CLI verbs, compared case-insensitively.
const RESERVED_NAMES: [&str; 2] = ["help", "version"];

/// One row of the profile listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub name: String,
    pub is_active: bool,
}

/// The active pointer resolved against the store.
///
/// The record may name a profile whose storage is gone; `exists` reports the
/// live check.
#[derive(Debug, Clone)]
pub struct ActiveStatus {
    pub name: String,
    pub exists: bool,
}

/// Optional settings for profile creation.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Rewrite the blob for a provider before storing it. A template create
    /// also installs the result as the live document and makes the new
    /// profile active; a bare create touches neither.
    pub template: Option<Provider>,

    /// Auth token injected by the template transform. Requires `template`.
    pub secret: Option<String>,
}

/// What `create_profile` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Stored a copy of the live document; active pointer untouched.
    Created,
    /// Template create: stored, installed as live, and made active.
    CreatedAndActivated,
}

/// Validate a candidate profile name.
///
/// Checks run in a fixed order so the reported reason is deterministic; the
/// first violation wins.
pub fn validate_profile_name(name: &str) -> std::result::Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }
    if name != name.trim() {
        return Err(NameError::SurroundingWhitespace);
    }
    if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        return Err(NameError::Reserved(name.to_string()));
    }
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(NameError::PathLike);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NameError::InvalidCharacters(name.to_string()));
    }
    Ok(())
}

/// List available profiles, the active one first, the rest in ascending
/// name order.
pub fn list_profiles(paths: &Paths) -> Result<Vec<ProfileEntry>> {
    paths.ensure_dirs()?;

    let state = State::read(&paths.state_file)?;

    let mut entries = Vec::new();
    let dir = fs::read_dir(&paths.profiles_dir).map_err(|e| {
        Error::fs(
            format!("Failed to read {}", paths.profiles_dir.display()),
            e,
        )
    })?;
    for entry in dir {
        let entry = entry.map_err(|e| Error::fs("Failed to read directory entry", e))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            entries.push(ProfileEntry {
                is_active: name == state.active_profile,
                name: name.to_string(),
            });
        }
    }

    entries.sort_by(|a, b| b.is_active.cmp(&a.is_active).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Check if a profile exists on disk.
pub fn profile_exists(paths: &Paths, name: &str) -> bool {
    paths.profile_dir(name).is_dir()
}

/// Resolve the active pointer against the store.
pub fn active_profile_status(paths: &Paths) -> Result<ActiveStatus> {
    let state = State::read(&paths.state_file)?;
    let exists = profile_exists(paths, &state.active_profile);
    Ok(ActiveStatus {
        name: state.active_profile,
        exists,
    })
}

/// Create a new profile from the live settings document.
pub fn create_profile(paths: &Paths, name: &str, options: &CreateOptions) -> Result<CreateOutcome> {
    validate_profile_name(name)?;
    if options.secret.is_some() && options.template.is_none() {
        return Err(Error::SecretWithoutTemplate);
    }
    if profile_exists(paths, name) {
        return Err(Error::ProfileExists(name.to_string()));
    }
    if !paths.live_settings.exists() {
        return Err(Error::LiveSettingsMissing(paths.live_settings.clone()));
    }

    let live = read_blob(&paths.live_settings)?;
    match options.template {
        None => {
            write_atomic(&paths.profile_settings(name), &live)?;
            Ok(CreateOutcome::Created)
        }
        Some(provider) => {
            let blob = provider.apply(&live, options.secret.as_deref())?;
            // Same ordering as the switch protocol: store, install live,
            // commit the pointer.
            write_atomic(&paths.profile_settings(name), &blob)?;
            write_atomic(&paths.live_settings, &blob)?;
            State::update(&paths.state_file, |s| {
                s.active_profile = name.to_string();
            })?;
            Ok(CreateOutcome::CreatedAndActivated)
        }
    }
}

/// Delete a profile's storage.
///
/// The active profile cannot be deleted; switch away first. A target that
/// vanishes between the existence check and the removal counts as removed.
pub fn delete_profile(paths: &Paths, name: &str) -> Result<()> {
    if !profile_exists(paths, name) {
        return Err(Error::ProfileNotFound(name.to_string()));
    }

    let state = State::read(&paths.state_file)?;
    if state.active_profile == name {
        return Err(Error::DeleteActive(name.to_string()));
    }

    let dir = paths.profile_dir(name);
    match fs::remove_dir_all(&dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::fs(
            format!("Failed to remove profile directory {}", dir.display()),
            e,
        )),
    }
}

/// Rename a profile in place; the stored blob is untouched.
///
/// Renaming a profile to itself is a no-op success with no filesystem
/// traffic. If the renamed profile was active, the state record follows so
/// the pointer never dangles.
pub fn rename_profile(paths: &Paths, old: &str, new: &str) -> Result<()> {
    validate_profile_name(new)?;
    if !profile_exists(paths, old) {
        return Err(Error::ProfileNotFound(old.to_string()));
    }
    if old == new {
        return Ok(());
    }
    if profile_exists(paths, new) {
        return Err(Error::ProfileExists(new.to_string()));
    }

    fs::rename(paths.profile_dir(old), paths.profile_dir(new)).map_err(|e| {
        Error::fs(format!("Failed to rename profile '{}' to '{}'", old, new), e)
    })?;

    let state = State::read(&paths.state_file)?;
    if state.active_profile == old {
        State::update(&paths.state_file, |s| {
            s.active_profile = new.to_string();
        })?;
    }

    Ok(())
}
