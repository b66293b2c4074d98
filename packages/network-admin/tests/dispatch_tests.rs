//! Dispatch through the command table: guards run first, statuses map to exit codes

mod common;

use clap::Parser;
use network_admin::cli::Cli;
use network_admin::kernel::{MockMultisite, PlatformCall};
use network_admin::{dispatch, CommandError, CommandStatus};

use crate::common::{three_site_network, Harness, JANE};

fn parse(argv: &[&str]) -> Cli {
    let mut full = vec!["network-admin"];
    full.extend_from_slice(argv);
    Cli::try_parse_from(full).expect("arguments should parse")
}

#[tokio::test]
async fn single_site_install_is_rejected_before_anything_else() {
    let harness = Harness::new(MockMultisite::single_site().with_user(7, JANE));
    let command = parse(&["add_user_to_all_sites", "--email=jane@example.com"])
        .command
        .into_command();

    let err = dispatch(command.as_ref(), &harness.deps).await.unwrap_err();

    assert!(matches!(err, CommandError::NotMultisite));
    assert_eq!(err.to_string(), "This is not a multisite installation.");
    assert_eq!(harness.platform.calls(), vec![PlatformCall::IsMultisite]);
    assert!(harness.output.lines().is_empty());
}

#[tokio::test]
async fn guard_runs_before_email_validation() {
    let harness = Harness::new(MockMultisite::single_site());
    let command = parse(&["add_user_to_all_sites", "--email=broken"])
        .command
        .into_command();

    let err = dispatch(command.as_ref(), &harness.deps).await.unwrap_err();

    assert!(matches!(err, CommandError::NotMultisite));
}

#[tokio::test]
async fn multisite_run_completes_with_zero_exit_status() {
    let harness = Harness::new(three_site_network().with_membership_error(2, "blog not found"));
    let command = parse(&[
        "add_user_to_all_sites",
        "--email=jane@example.com",
        "--role=editor",
    ])
    .command
    .into_command();

    let status = dispatch(command.as_ref(), &harness.deps).await.unwrap();

    assert_eq!(status, CommandStatus::Completed);
    assert_eq!(status.exit_code(), 0);
    assert_eq!(harness.platform.calls()[0], PlatformCall::IsMultisite);
    assert_eq!(harness.platform.membership_calls().len(), 3);
    assert_eq!(harness.output.lines().len(), 4);
}

#[tokio::test]
async fn interrupted_run_reports_interrupted_status() {
    let harness = Harness::new(three_site_network());
    harness.deps.cancel.cancel();
    let command = parse(&["add_user_to_all_sites", "--email=jane@example.com"])
        .command
        .into_command();

    let status = dispatch(command.as_ref(), &harness.deps).await.unwrap();

    assert_eq!(status, CommandStatus::Interrupted);
    assert_eq!(status.exit_code(), 130);
}

#[tokio::test]
async fn unreachable_platform_fails_the_guard() {
    let harness = Harness::new(
        three_site_network()
            .with_platform_error("This does not seem to be a WordPress installation."),
    );
    let command = parse(&["add_user_to_all_sites", "--email=jane@example.com"])
        .command
        .into_command();

    let err = dispatch(command.as_ref(), &harness.deps).await.unwrap_err();

    assert!(matches!(err, CommandError::Platform(_)));
    assert_eq!(
        err.to_string(),
        "This does not seem to be a WordPress installation."
    );
}
