// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no command logic.
// Commands are plain functions that take these traits as arguments.
//
// Naming convention: Base* for trait names (e.g., BaseMultisite)

use anyhow::Result;
use async_trait::async_trait;

use crate::email::is_email;
use crate::types::{Site, User};

// =============================================================================
// Multisite Trait (Infrastructure - host platform capabilities)
// =============================================================================

#[async_trait]
pub trait BaseMultisite: Send + Sync {
    /// Email syntax check used before any lookup
    fn is_valid_email(&self, email: &str) -> bool {
        is_email(email)
    }

    /// Whether the installation is a multisite network
    async fn is_multisite(&self) -> Result<bool>;

    /// Look a user up in the shared user directory
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Every site in the network, in platform order
    async fn list_sites(&self) -> Result<Vec<Site>>;

    /// Add `user` to `site` with `role`, or update the role if already a member.
    /// The error's display text is the platform's own message.
    async fn ensure_membership(&self, site: &Site, user: &User, role: &str) -> Result<()>;
}
