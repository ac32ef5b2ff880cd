use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use notifier_gateway::{run_notifier_server, NotifierServerConfig};
use notifier_render::RenderContext;
use notifier_slack::{
    DeliveryAdapter, DryRunDelivery, HandleEventStatus, NotificationHandler, SlackWebhookClient,
};
use tracing::info;

use crate::cli_args::{Cli, NotifierCommand};
use crate::file_config::{load_file_config, NotifierFileConfig};

pub async fn run_cli(cli: Cli) -> Result<()> {
    let file_config = load_file_config(cli.config.as_deref())?;
    let ctx = Arc::new(
        RenderContext::new(file_config.render.clone()).context("invalid render configuration")?,
    );

    match &cli.command {
        NotifierCommand::Serve { bind } => {
            let adapter = build_delivery_adapter(&cli, &file_config)?;
            info!(adapter = adapter.adapter_name(), "delivery adapter ready");
            run_notifier_server(NotifierServerConfig {
                bind: bind.clone(),
                handler: NotificationHandler::new(ctx, adapter),
            })
            .await
        }
        NotifierCommand::Render { payload } => {
            let status = render_payload_file(payload, ctx).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&status).context("failed to encode status")?
            );
            Ok(())
        }
    }
}

/// Picks the delivery adapter: `--dry-run`, then the CLI/env webhook URL,
/// then `[slack].webhook_url` from the config file.
pub fn build_delivery_adapter(
    cli: &Cli,
    file_config: &NotifierFileConfig,
) -> Result<Arc<dyn DeliveryAdapter>> {
    if cli.dry_run {
        return Ok(Arc::new(DryRunDelivery));
    }
    let webhook_url = [
        cli.slack_webhook_url.as_deref(),
        file_config.slack.webhook_url.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|url| !url.is_empty());
    let Some(webhook_url) = webhook_url else {
        bail!(
            "no Slack webhook URL configured; pass --slack-webhook-url, set SLACK_INCOMING_WEBHOOK_URL or [slack].webhook_url, or use --dry-run"
        );
    };
    let client = SlackWebhookClient::new(webhook_url, cli.request_timeout_ms)
        .context("failed to create slack webhook client")?;
    Ok(Arc::new(client))
}

/// Renders one payload file without delivering it.
pub async fn render_payload_file(path: &Path, ctx: Arc<RenderContext>) -> Result<HandleEventStatus> {
    let raw = std::fs::read(path)
        .with_context(|| format!("failed to read payload {}", path.display()))?;
    let handler = NotificationHandler::new(ctx, Arc::new(DryRunDelivery));
    Ok(handler.handle_payload(&raw).await)
}
