//! Command dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to every network command.
//! The host platform is reached only through the `BaseMultisite` trait.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use wp_cli_client::WpCliClient;

use crate::kernel::BaseMultisite;
use crate::output::CommandOutput;
use crate::types::{Site, User};

// =============================================================================
// WpCliClient Adapter (implements BaseMultisite trait)
// =============================================================================

/// Wrapper around WpCliClient that implements BaseMultisite trait
pub struct WpCliAdapter(pub Arc<WpCliClient>);

impl WpCliAdapter {
    pub fn new(client: Arc<WpCliClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseMultisite for WpCliAdapter {
    async fn is_multisite(&self) -> Result<bool> {
        Ok(self.0.is_multisite().await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.0.get_user_by_email(email).await?.map(User::from))
    }

    async fn list_sites(&self) -> Result<Vec<Site>> {
        let sites = self.0.list_sites().await?;
        Ok(sites.into_iter().map(Site::from).collect())
    }

    async fn ensure_membership(&self, site: &Site, user: &User, role: &str) -> Result<()> {
        let url = format!("{}{}", site.domain, site.path);
        self.0
            .set_role(&url, user.id.0, role)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e.message()))
    }
}

// =============================================================================
// CommandDeps
// =============================================================================

/// Dependencies accessible to network commands
#[derive(Clone)]
pub struct CommandDeps {
    pub platform: Arc<dyn BaseMultisite>,
    pub output: Arc<dyn CommandOutput>,
    /// Cancelled when the operator asks the run to stop (Ctrl-C)
    pub cancel: CancellationToken,
}

impl CommandDeps {
    pub fn new(platform: Arc<dyn BaseMultisite>, output: Arc<dyn CommandOutput>) -> Self {
        Self {
            platform,
            output,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
