//! Pure WP-CLI process client.
//!
//! A minimal client that drives a WordPress installation through the `wp`
//! executable. Each call spawns one WP-CLI process, waits for it, and decodes its
//! JSON output. Only the handful of commands needed for network-wide user
//! administration are covered.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_cli_client::{WpCliClient, WpCliOptions};
//!
//! let client = WpCliClient::new(WpCliOptions {
//!     path: Some("/var/www/html".into()),
//!     ..Default::default()
//! });
//!
//! if client.is_multisite().await? {
//!     for site in client.list_sites().await? {
//!         println!("{}", site.url());
//!     }
//! }
//! ```

pub mod cmd_builder;
pub mod error;
pub mod types;

pub use cmd_builder::{CmdBuilder, CmdOutput};
pub use error::{Result, WpCliError};
pub use types::{SiteRecord, UserRecord};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

const DEFAULT_BINARY: &str = "wp";

/// Prefix of the message `wp user get` prints when nothing matches.
const INVALID_USER_PREFIX: &str = "Invalid user";

/// Global WP-CLI parameters applied to every invocation
#[derive(Debug, Clone)]
pub struct WpCliOptions {
    /// Executable name or path
    pub binary: String,
    /// `--path`: WordPress install directory
    pub path: Option<PathBuf>,
    /// `--url`: site used for calls that are not site-specific
    pub url: Option<String>,
    /// `--allow-root`
    pub allow_root: bool,
}

impl Default for WpCliOptions {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            path: None,
            url: None,
            allow_root: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WpCliClient {
    options: WpCliOptions,
}

impl WpCliClient {
    pub fn new(options: WpCliOptions) -> Self {
        Self { options }
    }

    /// Build a `wp` invocation. `url` replaces the configured `--url` for
    /// site-specific commands.
    pub fn command<I, S>(&self, args: I, url: Option<&str>) -> CmdBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cmd = CmdBuilder::new(&self.options.binary).args(args);
        if let Some(ref path) = self.options.path {
            cmd = cmd.arg(format!("--path={}", path.display()));
        }
        if let Some(url) = url.or(self.options.url.as_deref()) {
            cmd = cmd.arg(format!("--url={url}"));
        }
        if self.options.allow_root {
            cmd = cmd.arg("--allow-root");
        }
        cmd
    }

    /// Whether the installation is a multisite network.
    ///
    /// `wp core is-installed --network` exits 1 without output when the install is
    /// single-site. Any `Error:` output means WP-CLI itself could not run.
    pub async fn is_multisite(&self) -> Result<bool> {
        let output = self
            .command(["core", "is-installed", "--network"], None)
            .run_capture()
            .await?;

        if output.success() {
            return Ok(true);
        }
        if output.code == Some(1) && output.stderr_string().trim().is_empty() {
            return Ok(false);
        }
        Err(output.into_error())
    }

    /// Look a user up by email address. `Ok(None)` when no user matches.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let cmd = self.command(
            [
                "user",
                "get",
                email,
                "--fields=ID,user_email,user_login",
                "--format=json",
            ],
            None,
        );
        let output = cmd.run_capture().await?;

        if !output.success() {
            let err = output.into_error();
            return match err {
                WpCliError::Command { ref message, .. }
                    if message.starts_with(INVALID_USER_PREFIX) =>
                {
                    tracing::debug!(email, %message, "user lookup matched nothing");
                    Ok(None)
                }
                other => Err(other),
            };
        }

        // `wp user get` falls back to matching the login, so confirm the email
        let user: UserRecord = parse_json(&cmd, &output)?;
        if !user.user_email.eq_ignore_ascii_case(email) {
            tracing::debug!(
                email,
                user_id = user.id,
                user_email = %user.user_email,
                "lookup matched a login, not an email"
            );
            return Ok(None);
        }
        Ok(Some(user))
    }

    /// All sites in the network, in the order WP-CLI returns them.
    pub async fn list_sites(&self) -> Result<Vec<SiteRecord>> {
        let cmd = self.command(
            ["site", "list", "--fields=blog_id,domain,path", "--format=json"],
            None,
        );
        let output = cmd.run_capture().await?;
        if !output.success() {
            return Err(output.into_error());
        }

        let sites: Vec<SiteRecord> = parse_json(&cmd, &output)?;
        tracing::debug!(count = sites.len(), "listed sites");
        Ok(sites)
    }

    /// Give `user_id` the `role` on the site at `site_url`.
    ///
    /// On multisite WP-CLI adds the user to the site first, so this both creates
    /// and updates memberships.
    pub async fn set_role(&self, site_url: &str, user_id: u64, role: &str) -> Result<()> {
        let output = self
            .command(
                [
                    "user".to_string(),
                    "set-role".to_string(),
                    user_id.to_string(),
                    role.to_string(),
                ],
                Some(site_url),
            )
            .run_capture()
            .await?;

        if !output.success() {
            return Err(output.into_error());
        }
        Ok(())
    }
}

fn parse_json<T: DeserializeOwned>(cmd: &CmdBuilder, output: &CmdOutput) -> Result<T> {
    serde_json::from_slice(&output.stdout).map_err(|source| WpCliError::Parse {
        command: cmd.get_args().join(" "),
        source,
    })
}
