//! Administrative commands for a WordPress multisite network.
//!
//! The host platform owns all state; commands here only sequence calls into it
//! through the [`kernel::BaseMultisite`] trait.

pub mod cli;
pub mod commands;
pub mod config;
pub mod email;
pub mod error;
pub mod kernel;
pub mod output;
pub mod types;

pub use commands::{dispatch, CommandStatus, NetworkCommand};
pub use config::Config;
pub use error::CommandError;
