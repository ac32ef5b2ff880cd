use async_trait::async_trait;
use notifier_render::SlackMessage;
use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates supported `DeliveryError` values.
pub enum DeliveryError {
    #[error("failed to encode slack message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("slack webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("slack webhook returned status {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
/// Sends one rendered message to its destination.
pub trait DeliveryAdapter: Send + Sync {
    fn adapter_name(&self) -> &'static str;

    /// Delivers `message` once. The returned string is the destination's
    /// response body, if it produced one.
    async fn deliver(&self, message: &SlackMessage) -> Result<Option<String>, DeliveryError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Accepts every message without sending it anywhere.
pub struct DryRunDelivery;

#[async_trait]
impl DeliveryAdapter for DryRunDelivery {
    fn adapter_name(&self) -> &'static str {
        "dry-run"
    }

    async fn deliver(&self, _message: &SlackMessage) -> Result<Option<String>, DeliveryError> {
        Ok(None)
    }
}
