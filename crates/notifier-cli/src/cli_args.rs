use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use notifier_slack::DEFAULT_REQUEST_TIMEOUT_MS;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "gitlab-slack-notifier",
    about = "Relay GitLab webhook events to a Slack incoming webhook",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: NotifierCommand,

    #[arg(
        long,
        global = true,
        env = "NOTIFIER_CONFIG",
        help = "TOML file with the Slack webhook, user/group directory and mention settings"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "slack-webhook-url",
        global = true,
        env = "SLACK_INCOMING_WEBHOOK_URL",
        hide_env_values = true,
        help = "Slack incoming webhook URL; overrides [slack].webhook_url from --config"
    )]
    pub slack_webhook_url: Option<String>,

    #[arg(
        long = "request-timeout-ms",
        global = true,
        env = "NOTIFIER_REQUEST_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = parse_positive_u64,
        help = "Timeout for the outbound Slack request in milliseconds"
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long = "dry-run",
        global = true,
        action = ArgAction::SetTrue,
        help = "Render messages but never post them to Slack"
    )]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum NotifierCommand {
    /// Serve the webhook endpoint over HTTP
    Serve {
        #[arg(
            long,
            env = "NOTIFIER_BIND",
            default_value = "127.0.0.1:8080",
            help = "Socket address to listen on"
        )]
        bind: String,
    },
    /// Render one payload file and print the resulting status JSON
    Render {
        #[arg(long, help = "Path to a GitLab webhook payload (JSON)")]
        payload: PathBuf,
    },
}
