//! Network command implementations and the dispatcher that runs them.
//!
//! Every command goes through [`dispatch`], which runs the command's
//! `before_invoke` guard first and only then the command itself.

pub mod add_user_to_all_sites;

use async_trait::async_trait;

use crate::error::CommandError;
use crate::kernel::{BaseMultisite, CommandDeps};

/// How a command that did not fail fatally ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Completed,
    /// Stopped early at the operator's request
    Interrupted,
}

impl CommandStatus {
    /// Process exit status
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandStatus::Completed => 0,
            // 128 + SIGINT
            CommandStatus::Interrupted => 130,
        }
    }
}

#[async_trait]
pub trait NetworkCommand: Send + Sync {
    /// Name the command is invoked by
    fn name(&self) -> &'static str;

    /// Precondition checked before `invoke`. Default: none.
    async fn before_invoke(&self, _deps: &CommandDeps) -> Result<(), CommandError> {
        Ok(())
    }

    async fn invoke(&self, deps: &CommandDeps) -> Result<CommandStatus, CommandError>;
}

/// Run `command`'s guard, then the command.
pub async fn dispatch(
    command: &dyn NetworkCommand,
    deps: &CommandDeps,
) -> Result<CommandStatus, CommandError> {
    tracing::debug!(command = command.name(), "checking preconditions");
    command.before_invoke(deps).await?;

    tracing::debug!(command = command.name(), "invoking");
    let status = command.invoke(deps).await?;

    tracing::info!(command = command.name(), ?status, "command finished");
    Ok(status)
}

/// Guard for commands that only make sense on a multisite network
pub async fn require_multisite(platform: &dyn BaseMultisite) -> Result<(), CommandError> {
    if platform.is_multisite().await? {
        Ok(())
    } else {
        Err(CommandError::NotMultisite)
    }
}
