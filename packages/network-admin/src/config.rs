use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use wp_cli_client::WpCliOptions;

const DEFAULT_WP_CLI_BIN: &str = "wp";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wp_cli_bin: String,
    pub wp_path: Option<PathBuf>,
    pub wp_url: Option<String>,
    pub allow_root: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wp_cli_bin: DEFAULT_WP_CLI_BIN.to_string(),
            wp_path: None,
            wp_url: None,
            allow_root: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            wp_cli_bin: non_empty("WP_CLI_BIN")
                .unwrap_or_else(|| DEFAULT_WP_CLI_BIN.to_string()),
            wp_path: non_empty("WP_PATH").map(PathBuf::from),
            wp_url: non_empty("WP_URL"),
            allow_root: match non_empty("WP_CLI_ALLOW_ROOT") {
                Some(v) => parse_flag(&v).context("WP_CLI_ALLOW_ROOT must be a boolean")?,
                None => false,
            },
            log_filter: non_empty("RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// WP-CLI global parameters derived from this configuration
    pub fn wp_cli_options(&self) -> WpCliOptions {
        WpCliOptions {
            binary: self.wp_cli_bin.clone(),
            path: self.wp_path.clone(),
            url: self.wp_url.clone(),
            allow_root: self.allow_root,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("unrecognised value '{}'", other)),
    }
}
