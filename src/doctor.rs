//! Diagnostics for the ccswap setup.
//!
//! This module implements the `ccswap doctor` command, which checks for
//! common issues:
//! - Presence of the profile store and the live settings document.
//! - Readability of the state record (corruption is surfaced, not hidden).
//! - Whether the active pointer resolves to existing storage.
//! - Per-profile blob presence and name validity.

use crate::error::Error;
use crate::paths::Paths;
use crate::profiles::{active_profile_status, list_profiles, validate_profile_name};
use crate::ui::Ui;

/// Run the doctor diagnostics
pub fn run_doctor(paths: &Paths, ui: &Ui) {
    ui.section("ccswap doctor");
    ui.newline();

    let mut problems = 0usize;

    if paths.profiles_dir.is_dir() {
        ui.println(format!(
            "{} Profile store: {}",
            ui.icon_ok(),
            paths.profiles_dir.display()
        ));
    } else {
        // Not an error: the store is created lazily on first use.
        ui.println(format!(
            "{} Profile store not created yet: {}",
            ui.icon_warn(),
            paths.profiles_dir.display()
        ));
    }

    if paths.live_settings.is_file() {
        ui.println(format!(
            "{} Live settings: {}",
            ui.icon_ok(),
            paths.live_settings.display()
        ));
    } else {
        problems += 1;
        ui.println(format!(
            "{} {}",
            ui.icon_err(),
            Error::LiveSettingsMissing(paths.live_settings.clone())
        ));
    }

    match active_profile_status(paths) {
        Ok(status) => {
            ui.println(format!(
                "{} State record readable (active profile: {})",
                ui.icon_ok(),
                status.name
            ));
            if status.exists {
                ui.println(format!("{} Active profile storage present", ui.icon_ok()));
            } else {
                // The pointer may legitimately lead nowhere; the slot is
                // materialized by the next switch's mirror step.
                ui.println(format!(
                    "{} Active profile '{}' has no storage yet",
                    ui.icon_warn(),
                    status.name
                ));
            }
        }
        Err(e) => {
            problems += 1;
            ui.println(format!("{} {}", ui.icon_err(), e));
        }
    }

    match list_profiles(paths) {
        Ok(entries) if entries.is_empty() => {
            ui.println(format!("{} No profiles stored yet", ui.icon_warn()));
        }
        Ok(entries) => {
            for entry in &entries {
                if !paths.profile_settings(&entry.name).is_file() {
                    problems += 1;
                    ui.println(format!(
                        "{} Profile '{}' has no settings blob",
                        ui.icon_err(),
                        entry.name
                    ));
                } else if validate_profile_name(&entry.name).is_err() {
                    ui.println(format!(
                        "{} Profile directory '{}' has a name ccswap would not accept",
                        ui.icon_warn(),
                        entry.name
                    ));
                } else {
                    ui.println(format!("{} Profile '{}' looks good", ui.icon_ok(), entry.name));
                }
            }
        }
        Err(e) => {
            problems += 1;
            ui.println(format!("{} {}", ui.icon_err(), e));
        }
    }

    ui.newline();
    if problems == 0 {
        ui.ok("No problems found");
    } else {
        ui.warn(format!("{} problem(s) found", problems));
    }
}
