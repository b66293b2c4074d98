//! Shared helpers for network command tests

#![allow(dead_code)]

use network_admin::commands::add_user_to_all_sites::{
    add_user_to_all_sites, AddUserToAllSitesArgs, RunSummary,
};
use network_admin::kernel::{CommandDeps, MockMultisite};
use network_admin::output::CapturedOutput;
use network_admin::CommandError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub const JANE: &str = "jane@example.com";

/// Multisite network with jane (id 7) and sites a, b, c (ids 1..=3)
pub fn three_site_network() -> MockMultisite {
    MockMultisite::new()
        .with_user(7, JANE)
        .with_site(1, "a.example.com", "/")
        .with_site(2, "b.example.com", "/")
        .with_site(3, "c.example.com", "/")
}

pub fn args(email: &str, role: Option<&str>) -> AddUserToAllSitesArgs {
    AddUserToAllSitesArgs {
        email: email.to_string(),
        role: role.map(str::to_string),
    }
}

/// Run the handler directly, returning its result and the captured lines
pub async fn run_handler(
    platform: &MockMultisite,
    email: &str,
    role: Option<&str>,
) -> (Result<RunSummary, CommandError>, Vec<String>) {
    let output = CapturedOutput::new();
    let result = add_user_to_all_sites(
        platform,
        &output,
        &args(email, role),
        &CancellationToken::new(),
    )
    .await;
    (result, output.lines())
}

/// Dependencies backed by a shared mock, plus handles to inspect afterwards
pub struct Harness {
    pub platform: Arc<MockMultisite>,
    pub output: Arc<CapturedOutput>,
    pub deps: CommandDeps,
}

impl Harness {
    pub fn new(platform: MockMultisite) -> Self {
        let platform = Arc::new(platform);
        let output = Arc::new(CapturedOutput::new());
        let deps = CommandDeps::new(platform.clone(), output.clone());
        Self {
            platform,
            output,
            deps,
        }
    }
}
