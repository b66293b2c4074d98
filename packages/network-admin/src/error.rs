//! Fatal errors for network commands.
//!
//! Any of these aborts the command before or instead of processing sites.
//! Per-site failures are not errors at this level; they are reported inline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Email failed the syntax check
    #[error("The {0} email address is not valid.")]
    InvalidEmail(String),

    /// No user in the network directory has this email
    #[error("No user found with the {0} email address.")]
    UserNotFound(String),

    /// The installation is single-site
    #[error("This is not a multisite installation.")]
    NotMultisite,

    /// The platform itself failed (unreachable, crashed, unexpected output)
    #[error(transparent)]
    Platform(#[from] anyhow::Error),
}
