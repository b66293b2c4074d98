// Test dependencies - mock implementations for testing
//
// Provides an in-memory multisite network that records every call made to it.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use super::BaseMultisite;
use crate::types::{Site, SiteId, User, UserId};

// =============================================================================
// Mock Multisite
// =============================================================================

/// One recorded call against the mock platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    IsMultisite,
    FindUserByEmail(String),
    ListSites,
    EnsureMembership(MembershipCallArgs),
}

/// Arguments captured from an ensure_membership call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipCallArgs {
    pub site_id: SiteId,
    pub user_id: UserId,
    pub role: String,
}

pub struct MockMultisite {
    multisite: bool,
    users: Vec<User>,
    sites: Vec<Site>,
    membership_errors: HashMap<SiteId, String>,
    platform_error: Option<String>,
    memberships: Arc<Mutex<BTreeMap<(SiteId, UserId), String>>>,
    calls: Arc<Mutex<Vec<PlatformCall>>>,
}

impl Default for MockMultisite {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMultisite {
    /// An empty multisite network
    pub fn new() -> Self {
        Self {
            multisite: true,
            users: Vec::new(),
            sites: Vec::new(),
            membership_errors: HashMap::new(),
            platform_error: None,
            memberships: Arc::new(Mutex::new(BTreeMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A single-site installation
    pub fn single_site() -> Self {
        Self {
            multisite: false,
            ..Self::new()
        }
    }

    pub fn with_user(mut self, id: u64, email: &str) -> Self {
        let login = email.split('@').next().unwrap_or(email).to_string();
        self.users.push(User {
            id: UserId(id),
            email: email.to_string(),
            login,
        });
        self
    }

    pub fn with_site(mut self, id: u64, domain: &str, path: &str) -> Self {
        self.sites.push(Site::new(id, domain, path));
        self
    }

    /// Make ensure_membership fail for one site with the given message
    pub fn with_membership_error(mut self, site_id: u64, message: &str) -> Self {
        self.membership_errors
            .insert(SiteId(site_id), message.to_string());
        self
    }

    /// Make every lookup and listing fail, as when the platform cannot be reached
    pub fn with_platform_error(mut self, message: &str) -> Self {
        self.platform_error = Some(message.to_string());
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the ensure_membership calls, in order
    pub fn membership_calls(&self) -> Vec<MembershipCallArgs> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                PlatformCall::EnsureMembership(args) => Some(args.clone()),
                _ => None,
            })
            .collect()
    }

    /// Check if the sites were listed
    pub fn listed_sites(&self) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| *c == PlatformCall::ListSites)
    }

    /// Current membership state: (site, user) -> role
    pub fn memberships(&self) -> BTreeMap<(SiteId, UserId), String> {
        self.memberships.lock().unwrap().clone()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_platform(&self) -> Result<()> {
        match self.platform_error {
            Some(ref message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaseMultisite for MockMultisite {
    async fn is_multisite(&self) -> Result<bool> {
        self.record(PlatformCall::IsMultisite);
        self.check_platform()?;
        Ok(self.multisite)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.record(PlatformCall::FindUserByEmail(email.to_string()));
        self.check_platform()?;
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_sites(&self) -> Result<Vec<Site>> {
        self.record(PlatformCall::ListSites);
        self.check_platform()?;
        Ok(self.sites.clone())
    }

    async fn ensure_membership(&self, site: &Site, user: &User, role: &str) -> Result<()> {
        self.record(PlatformCall::EnsureMembership(MembershipCallArgs {
            site_id: site.id,
            user_id: user.id,
            role: role.to_string(),
        }));

        if let Some(message) = self.membership_errors.get(&site.id) {
            return Err(anyhow::anyhow!("{}", message));
        }

        // Add-or-update, like the platform
        self.memberships
            .lock()
            .unwrap()
            .insert((site.id, user.id), role.to_string());
        Ok(())
    }
}
