//! High-level command orchestration for the CLI.
//!
//! This module contains the handler functions for each CLI command (`list`,
//! `create`, `use`, etc.). It is the presentation layer over the core
//! operations, interacting with:
//! - `crate::ui` for output and prompts.
//! - `crate::profiles` for the profile store.
//! - `crate::switch` for profile activation.
//! - `crate::state` for the persisted active pointer.
//!
//! Core failures surface their reason string verbatim, with a hint line for
//! the common cases.

use anstyle::AnsiColor;
use anyhow::{Context, Result};
use inquire::{Confirm, Password};
use std::io::IsTerminal;

use crate::doctor::run_doctor;
use crate::error::Error;
use crate::paths::Paths;
use crate::profiles::{
    CreateOptions, CreateOutcome, create_profile, delete_profile, list_profiles, profile_exists,
    rename_profile,
};
use crate::providers::Provider;
use crate::state::State;
use crate::switch::{SwitchOutcome, switch_to_profile};
use crate::ui::Ui;

/// Attach a follow-up hint to the errors a user can act on directly.
fn with_hint(err: Error) -> anyhow::Error {
    let hint = match &err {
        Error::ProfileNotFound(_) => Some("Use 'ccswap list' to see available profiles."),
        Error::ProfileExists(_) => Some("Choose a different name or delete the existing profile."),
        Error::DeleteActive(_) => Some("Use 'ccswap use <other-profile>' first."),
        _ => None,
    };
    match hint {
        Some(hint) => anyhow::anyhow!("{}\nHint: {}", err, hint),
        None => err.into(),
    }
}

/// List all available profiles
pub fn list(paths: &Paths, ui: &Ui) -> Result<()> {
    let profiles = list_profiles(paths).map_err(with_hint)?;

    if profiles.is_empty() {
        ui.warn("No profiles found.");
        ui.newline();
        ui.println("Create one with:");
        ui.println(format!("  {} create <name>", ui.bold("ccswap")));
        return Ok(());
    }

    let mut table = ui.simple_table();
    table.set_header(vec![
        ui.header_cell(""),
        ui.header_cell("Profile"),
        ui.header_cell("Status"),
    ]);

    for entry in &profiles {
        let icon = if entry.is_active { ui.icon_ok() } else { " " };
        let status = if entry.is_active {
            ui.colored_cell("active", AnsiColor::Green)
        } else {
            ui.cell("-")
        };
        table.add_row(vec![ui.cell(icon), ui.cell(&entry.name), status]);
    }

    ui.section("Profiles");
    ui.println(table.to_string());

    Ok(())
}

/// Show the active profile and the live settings status
pub fn current(paths: &Paths, ui: &Ui) -> Result<()> {
    let state = State::read(&paths.state_file).map_err(with_hint)?;

    ui.section("Current Profile");
    ui.newline();

    let mut table = ui.simple_table();
    table.add_row(vec![
        ui.cell("Active profile:"),
        ui.header_cell(&state.active_profile),
    ]);

    let storage = if profile_exists(paths, &state.active_profile) {
        ui.colored_cell("present", AnsiColor::Green)
    } else {
        // Materialized by the next switch's mirror step.
        ui.colored_cell("not stored yet", AnsiColor::Yellow)
    };
    table.add_row(vec![ui.cell("Profile storage:"), storage]);

    if paths.state_file.exists() {
        table.add_row(vec![
            ui.cell("Last synced:"),
            ui.cell(state.last_synced_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]);
    }

    let live = if paths.live_settings.is_file() {
        ui.cell(paths.live_settings.display().to_string())
    } else {
        ui.colored_cell("missing", AnsiColor::Yellow)
    };
    table.add_row(vec![ui.cell("Live settings:"), live]);

    ui.println(table.to_string());
    Ok(())
}

/// Create a new profile from the live settings
pub fn create(
    paths: &Paths,
    name: &str,
    template: Option<Provider>,
    secret: Option<String>,
    ui: &Ui,
) -> Result<()> {
    paths.ensure_dirs().map_err(with_hint)?;

    // A template without a token usually wants one; offer a prompt when
    // we have a terminal to ask on.
    let secret = match (&template, secret) {
        (Some(_), None) if std::io::stdout().is_terminal() => {
            let typed = Password::new("Provider auth token (leave empty to skip):")
                .without_confirmation()
                .prompt()
                .context("Token prompt cancelled")?;
            if typed.is_empty() { None } else { Some(typed) }
        }
        (_, secret) => secret,
    };

    let options = CreateOptions { template, secret };
    let outcome = create_profile(paths, name, &options).map_err(with_hint)?;

    match outcome {
        CreateOutcome::Created => {
            ui.ok(format!("Created profile '{}'", name));
            ui.newline();
            ui.println("To activate it:");
            ui.println(format!("  ccswap use {}", name));
        }
        CreateOutcome::CreatedAndActivated => {
            ui.ok(format!("Created profile '{}' and switched to it", name));
        }
    }

    Ok(())
}

/// Switch to a profile
pub fn use_profile(paths: &Paths, name: &str, ui: &Ui) -> Result<()> {
    paths.ensure_dirs().map_err(with_hint)?;

    let spinner = ui.spinner(format!("Switching to profile '{}'...", name));

    match switch_to_profile(paths, name) {
        Ok(SwitchOutcome::Switched { previous }) => {
            ui.spinner_finish_ok(
                &spinner,
                format!("Active profile: {} (was {})", name, previous),
            );
            Ok(())
        }
        Ok(SwitchOutcome::AlreadyActive) => {
            ui.spinner_finish_ok(&spinner, format!("Profile '{}' is already active", name));
            Ok(())
        }
        Err(e) => {
            ui.spinner_finish_err(&spinner, format!("Failed to switch: {}", e));
            Err(with_hint(e))
        }
    }
}

/// Delete a profile
pub fn delete(paths: &Paths, name: &str, force: bool, ui: &Ui) -> Result<()> {
    if !profile_exists(paths, name) {
        return Err(with_hint(Error::ProfileNotFound(name.to_string())));
    }

    if !force {
        let confirmed = Confirm::new(&format!("Delete profile '{}'?", name))
            .with_default(false)
            .with_help_message("This permanently removes the stored settings copy")
            .prompt()
            .context("Confirmation cancelled")?;

        if !confirmed {
            ui.warn("Deletion cancelled.");
            return Ok(());
        }
    }

    delete_profile(paths, name).map_err(with_hint)?;

    ui.ok(format!("Deleted profile '{}'", name));
    Ok(())
}

/// Rename a profile
pub fn rename(paths: &Paths, old: &str, new: &str, ui: &Ui) -> Result<()> {
    rename_profile(paths, old, new).map_err(with_hint)?;

    if old == new {
        ui.ok(format!("Profile '{}' left unchanged", old));
    } else {
        ui.ok(format!("Renamed profile '{}' to '{}'", old, new));
    }
    Ok(())
}

/// Run diagnostics
pub fn doctor(paths: &Paths, ui: &Ui) -> Result<()> {
    run_doctor(paths, ui);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{setup_test_paths, write_live};
    use crate::ui::ColorMode;
    use tempfile::TempDir;

    fn test_ui() -> Ui {
        Ui::new(ColorMode::Never, false)
    }

    #[test]
    fn test_list_empty() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        assert!(list(&paths, &test_ui()).is_ok());
    }

    #[test]
    fn test_create_and_list() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        write_live(&paths, br#"{"test": true}"#);

        create(&paths, "work", None, None, &test_ui()).unwrap();

        assert!(profile_exists(&paths, "work"));
        assert!(list(&paths, &test_ui()).is_ok());
    }

    #[test]
    fn test_create_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        write_live(&paths, b"{}");

        create(&paths, "work", None, None, &test_ui()).unwrap();
        assert!(create(&paths, "work", None, None, &test_ui()).is_err());
    }

    #[test]
    fn test_use_nonexistent_fails() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        write_live(&paths, b"{}");

        assert!(use_profile(&paths, "nonexistent", &test_ui()).is_err());
    }

    #[test]
    fn test_delete_nonexistent_fails() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);

        assert!(delete(&paths, "ghost", true, &test_ui()).is_err());
    }

    #[test]
    fn test_delete_with_force() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        write_live(&paths, b"{}");

        create(&paths, "old", None, None, &test_ui()).unwrap();
        delete(&paths, "old", true, &test_ui()).unwrap();

        assert!(!profile_exists(&paths, "old"));
    }

    #[test]
    fn test_current_without_state() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        assert!(current(&paths, &test_ui()).is_ok());
    }

    #[test]
    fn test_rename_command() {
        let temp = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp);
        write_live(&paths, b"{}");

        create(&paths, "work", None, None, &test_ui()).unwrap();
        rename(&paths, "work", "work2", &test_ui()).unwrap();

        assert!(!profile_exists(&paths, "work"));
        assert!(profile_exists(&paths, "work2"));
    }
}
