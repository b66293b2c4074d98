//! Command-line surface: global WP-CLI options and the table of network commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::add_user_to_all_sites::{AddUserToAllSites, AddUserToAllSitesArgs};
use crate::commands::NetworkCommand;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "network-admin")]
#[command(about = "Administrative commands for a WordPress multisite network")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the environment configuration
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalArgs {
    /// WP-CLI executable [env: WP_CLI_BIN]
    #[arg(long, global = true, value_name = "BIN")]
    pub wp_bin: Option<String>,

    /// Path to the WordPress files [env: WP_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Network URL for calls that are not site-specific [env: WP_URL]
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Let WP-CLI run as the root user [env: WP_CLI_ALLOW_ROOT]
    #[arg(long, global = true)]
    pub allow_root: bool,
}

impl GlobalArgs {
    /// Flags given on the command line win over the environment
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ref bin) = self.wp_bin {
            config.wp_cli_bin = bin.clone();
        }
        if let Some(ref path) = self.path {
            config.wp_path = Some(path.clone());
        }
        if let Some(ref url) = self.url {
            config.wp_url = Some(url.clone());
        }
        if self.allow_root {
            config.allow_root = true;
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Adds a user to all sites in a multisite network.
    ///
    /// Example: network-admin add_user_to_all_sites --email=jane@example.com --role=administrator
    #[command(name = "add_user_to_all_sites")]
    AddUserToAllSites(AddUserToAllSitesArgs),
}

impl Commands {
    /// Resolve the parsed subcommand to the command object that runs it
    pub fn into_command(self) -> Box<dyn NetworkCommand> {
        match self {
            Commands::AddUserToAllSites(args) => Box::new(AddUserToAllSites::new(args)),
        }
    }
}
