//! Profile switching logic.
//!
//! This module implements the core mechanism of `ccswap`: the
//! mirror-then-replace protocol that swaps the live settings document for a
//! stored profile copy.
//!
//! Ordering is mandatory: mirror, then replace, then commit. Each step goes
//! through the atomic writer, so a crash between steps leaves a state that a
//! repeated switch to the same target repairs.

use crate::error::{Error, Result};
use crate::fs_utils::{read_blob, write_atomic};
use crate::paths::Paths;
use crate::profiles::{profile_exists, validate_profile_name};
use crate::state::State;

/// Result of a switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The live document was replaced and the state record now points at
    /// the target.
    Switched { previous: String },

    /// The target was already active. The mirror step still ran, so
    /// in-place edits to the live document were captured.
    AlreadyActive,
}

/// Switch the live settings document to `target`.
pub fn switch_to_profile(paths: &Paths, target: &str) -> Result<SwitchOutcome> {
    validate_profile_name(target)?;

    if !paths.live_settings.exists() {
        return Err(Error::LiveSettingsMissing(paths.live_settings.clone()));
    }
    if !profile_exists(paths, target) {
        return Err(Error::ProfileNotFound(target.to_string()));
    }

    let active = State::read(&paths.state_file)?.active_profile;

    // Mirror: current live bytes into the active profile's slot. Runs even
    // when the target is already active, and even when that slot does not
    // exist yet.
    let live = read_blob(&paths.live_settings)?;
    write_atomic(&paths.profile_settings(&active), &live)?;

    if target == active {
        return Ok(SwitchOutcome::AlreadyActive);
    }

    // Replace: install the target's stored bytes as the live document.
    let stored = read_blob(&paths.profile_settings(target))?;
    write_atomic(&paths.live_settings, &stored)?;

    // Commit: the pointer moves only after the content is installed.
    State::update(&paths.state_file, |s| {
        s.active_profile = target.to_string();
    })?;

    Ok(SwitchOutcome::Switched { previous: active })
}
