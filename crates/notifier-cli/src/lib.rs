//! Command-line entry points for the GitLab → Slack notifier.

pub mod bootstrap_helpers;
pub mod cli_args;
pub mod commands;
pub mod file_config;

pub use bootstrap_helpers::init_tracing;
pub use cli_args::{Cli, NotifierCommand};
pub use commands::{build_delivery_adapter, render_payload_file, run_cli};
pub use file_config::{load_file_config, NotifierFileConfig, SlackFileConfig};
