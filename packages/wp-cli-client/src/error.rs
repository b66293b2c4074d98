//! Error types for the WP-CLI client.

use thiserror::Error;

/// Result type for WP-CLI client operations.
pub type Result<T> = std::result::Result<T, WpCliError>;

/// WP-CLI client errors.
#[derive(Debug, Error)]
pub enum WpCliError {
    /// The executable could not be started (missing binary, permissions)
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// WP-CLI ran and exited non-zero. `message` is the reduced `Error:` text.
    #[error("{message}")]
    Command { code: Option<i32>, message: String },

    /// Output was not the JSON shape we asked for
    #[error("unexpected output from `wp {command}`: {source}")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WpCliError {
    /// The message WP-CLI reported, without any prefix added by this crate.
    pub fn message(&self) -> String {
        match self {
            WpCliError::Command { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
