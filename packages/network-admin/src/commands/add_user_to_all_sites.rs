//! `add_user_to_all_sites`: give one user a role on every site of the network.

use async_trait::async_trait;
use clap::Args;
use tokio_util::sync::CancellationToken;

use super::{require_multisite, CommandStatus, NetworkCommand};
use crate::error::CommandError;
use crate::kernel::{BaseMultisite, CommandDeps};
use crate::output::CommandOutput;
use crate::types::Site;

pub const COMMAND_NAME: &str = "add_user_to_all_sites";

/// Role assigned when none is given
pub const DEFAULT_ROLE: &str = "subscriber";

#[derive(Debug, Clone, Args)]
pub struct AddUserToAllSitesArgs {
    /// The email address of the user.
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// The role that should be assigned to the user on each site. Defaults to
    /// subscriber if not set. If the user already exists on a site its role will be
    /// updated.
    #[arg(long, value_name = "ROLE")]
    pub role: Option<String>,
}

/// Trimmed role, or the default when absent or blank.
pub fn resolve_role(role: Option<&str>) -> String {
    match role.map(str::trim) {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

/// A site whose membership call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFailure {
    pub site: Site,
    pub message: String,
}

/// Result of a run that got past validation and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub email: String,
    pub role: String,
    pub total_sites: usize,
    pub processed: usize,
    pub failures: Vec<SiteFailure>,
    pub interrupted: bool,
}

impl RunSummary {
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// The closing line of the command's output
    pub fn summary_line(&self) -> String {
        let errors = match self.error_count() {
            0 => String::new(),
            n => format!(" with {} errors", n),
        };

        if self.interrupted {
            format!(
                "Adding user {} to all sites interrupted after {} of {} sites{}.",
                self.email, self.processed, self.total_sites, errors
            )
        } else {
            format!(
                "Adding user {} to all sites completed{}.",
                self.email, errors
            )
        }
    }
}

/// Ensure the user behind `args.email` is a member of every site.
///
/// Invalid email and unknown user are fatal and happen before any site is listed.
/// A failing site is reported and skipped. `cancel` is checked between sites;
/// sites already processed stay processed.
pub async fn add_user_to_all_sites(
    platform: &dyn BaseMultisite,
    output: &dyn CommandOutput,
    args: &AddUserToAllSitesArgs,
    cancel: &CancellationToken,
) -> Result<RunSummary, CommandError> {
    let email = args.email.as_str();

    if !platform.is_valid_email(email) {
        return Err(CommandError::InvalidEmail(email.to_string()));
    }

    let user = platform
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| CommandError::UserNotFound(email.to_string()))?;

    let role = resolve_role(args.role.as_deref());
    let sites = platform.list_sites().await?;

    tracing::info!(
        email,
        user_id = %user.id,
        role = %role,
        sites = sites.len(),
        "adding user to all sites"
    );

    let mut summary = RunSummary {
        email: email.to_string(),
        role: role.clone(),
        total_sites: sites.len(),
        processed: 0,
        failures: Vec::new(),
        interrupted: false,
    };

    for site in &sites {
        if cancel.is_cancelled() {
            tracing::warn!(
                processed = summary.processed,
                remaining = sites.len() - summary.processed,
                "interrupted, not starting further sites"
            );
            summary.interrupted = true;
            break;
        }

        let url = site.display_url();
        match platform.ensure_membership(site, &user, &role).await {
            Ok(()) => {
                tracing::debug!(site_id = %site.id, url = %url, "membership ensured");
                output.success(&format!("User added to {}", url));
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(
                    site_id = %site.id,
                    url = %url,
                    error = %message,
                    "membership failed"
                );
                output.warning(&format!(
                    "An error occurred adding user to {}: {}",
                    url, message
                ));
                summary.failures.push(SiteFailure {
                    site: site.clone(),
                    message,
                });
            }
        }
        summary.processed += 1;
    }

    output.log(&summary.summary_line());
    Ok(summary)
}

/// Registered form of the command
pub struct AddUserToAllSites {
    args: AddUserToAllSitesArgs,
}

impl AddUserToAllSites {
    pub fn new(args: AddUserToAllSitesArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl NetworkCommand for AddUserToAllSites {
    fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    async fn before_invoke(&self, deps: &CommandDeps) -> Result<(), CommandError> {
        require_multisite(deps.platform.as_ref()).await
    }

    async fn invoke(&self, deps: &CommandDeps) -> Result<CommandStatus, CommandError> {
        let summary = add_user_to_all_sites(
            deps.platform.as_ref(),
            deps.output.as_ref(),
            &self.args,
            &deps.cancel,
        )
        .await?;

        Ok(if summary.interrupted {
            CommandStatus::Interrupted
        } else {
            CommandStatus::Completed
        })
    }
}
