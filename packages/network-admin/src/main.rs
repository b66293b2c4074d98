//! network-admin CLI
//!
//! Runs one network command against the WordPress install reached through WP-CLI.

use anyhow::{anyhow, Result};
use clap::Parser;
use network_admin::cli::Cli;
use network_admin::kernel::{CommandDeps, WpCliAdapter};
use network_admin::output::ConsoleOutput;
use network_admin::{dispatch, Config};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wp_cli_client::WpCliClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.global.apply(Config::from_env()?);

    // Diagnostics go to stderr; stdout carries the command's own lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    ensure_wp_cli(&config)?;

    let client = Arc::new(WpCliClient::new(config.wp_cli_options()));
    let cancel = CancellationToken::new();
    let deps = CommandDeps::new(
        Arc::new(WpCliAdapter::new(client)),
        Arc::new(ConsoleOutput::new()),
    )
    .with_cancel(cancel.clone());

    // Spawn signal handler
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("received interrupt, stopping after the current site");
            cancel.cancel();
        }
    });

    let command = cli.command.into_command();
    match dispatch(command.as_ref(), &deps).await {
        Ok(status) => Ok(ExitCode::from(status.exit_code())),
        Err(e) => {
            tracing::debug!(command = command.name(), error = ?e, "command failed");
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(1))
        }
    }
}

fn ensure_wp_cli(config: &Config) -> Result<()> {
    if which::which(&config.wp_cli_bin).is_err() {
        return Err(anyhow!(
            "{} not found. Install WP-CLI (https://wp-cli.org) or set WP_CLI_BIN.",
            config.wp_cli_bin
        ));
    }
    Ok(())
}
