//! Error types for the core profile operations.
//!
//! Every failure a core operation can report is one of these variants, so
//! callers and tests can match on the failure class. The `Display` string is
//! exactly what the user sees.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a candidate profile name was rejected.
///
/// Checks run in a fixed order, so a given bad name always reports the same
/// reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Profile name cannot be empty")]
    Empty,

    #[error("Profile name cannot have leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("'{0}' is a reserved name")]
    Reserved(String),

    #[error("Profile name cannot contain path separators or '..'")]
    PathLike,

    #[error(
        "Invalid profile name '{0}'. Only alphanumeric characters, hyphens (-), and underscores (_) are allowed"
    )]
    InvalidCharacters(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("Profile '{0}' does not exist")]
    ProfileNotFound(String),

    #[error(
        "No {} found. Run the host application once to generate it, or run the setup script provided by your provider.",
        .0.display()
    )]
    LiveSettingsMissing(PathBuf),

    #[error("Profile '{0}' already exists")]
    ProfileExists(String),

    #[error("Cannot delete '{0}' while it is the active profile. Switch to another profile first")]
    DeleteActive(String),

    #[error("State file {} is corrupt: {source}", .path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("A secret requires a provider template")]
    SecretWithoutTemplate,

    #[error("Unknown provider template '{0}'")]
    UnknownProvider(String),

    #[error("Cannot apply a provider template: settings are not valid JSON: {0}")]
    InvalidSettingsJson(#[source] serde_json::Error),

    #[error("Cannot apply a provider template: settings root is not a JSON object")]
    SettingsNotObject,

    #[error("Failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to determine home directory")]
    NoHomeDir,

    #[error("{context}: {source}")]
    Filesystem {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the operation that hit it.
    pub(crate) fn fs(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            context: context.into(),
            source,
        }
    }
}
