use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use notifier_events::{parse_webhook_event, WebhookEvent};
use notifier_render::{route, FormatOutcome, RenderContext, SlackMessage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::delivery::DeliveryAdapter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
/// Per-request result reported back to the webhook caller.
pub enum HandleEventStatus {
    Ignored,
    Sent {
        message: SlackMessage,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response: Option<String>,
    },
    Error {
        error: String,
    },
}

impl HandleEventStatus {
    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Routes events and delivers the resulting messages.
#[derive(Clone)]
pub struct NotificationHandler {
    ctx: Arc<RenderContext>,
    adapter: Arc<dyn DeliveryAdapter>,
}

impl NotificationHandler {
    pub fn new(ctx: Arc<RenderContext>, adapter: Arc<dyn DeliveryAdapter>) -> Self {
        Self { ctx, adapter }
    }

    pub fn render_context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Formats `event` without delivering it.
    pub fn render(&self, event: &WebhookEvent) -> FormatOutcome {
        guard_formatter(event.object_kind(), || route(event, &self.ctx))
    }

    pub async fn handle(&self, event: &WebhookEvent) -> HandleEventStatus {
        let object_kind = event.object_kind();
        match self.render(event) {
            FormatOutcome::Ignored => {
                debug!(object_kind, "event ignored");
                HandleEventStatus::Ignored
            }
            FormatOutcome::Error(error) => {
                warn!(object_kind, error = error.as_str(), "event not rendered");
                HandleEventStatus::Error { error }
            }
            FormatOutcome::Message(message) => match self.adapter.deliver(&message).await {
                Ok(response) => {
                    info!(
                        object_kind,
                        adapter = self.adapter.adapter_name(),
                        "notification sent"
                    );
                    HandleEventStatus::Sent { message, response }
                }
                Err(error) => {
                    warn!(
                        object_kind,
                        adapter = self.adapter.adapter_name(),
                        error = %error,
                        "notification delivery failed"
                    );
                    HandleEventStatus::error(error.to_string())
                }
            },
        }
    }

    /// Parses raw request bytes, then behaves like [`Self::handle`].
    pub async fn handle_payload(&self, raw: &[u8]) -> HandleEventStatus {
        match parse_webhook_event(raw) {
            Ok(event) => self.handle(&event).await,
            Err(error) => {
                warn!(error = %error, "rejected webhook payload");
                HandleEventStatus::error(error.to_string())
            }
        }
    }
}

/// Runs a formatter, turning a panic into an error outcome for `object_kind`.
fn guard_formatter(object_kind: &str, format: impl FnOnce() -> FormatOutcome) -> FormatOutcome {
    catch_unwind(AssertUnwindSafe(format)).unwrap_or_else(|_| {
        FormatOutcome::Error(format!("formatter panicked on {object_kind} event"))
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use notifier_render::{FormatOutcome, RenderConfig, RenderContext, SlackMessage};
    use serde_json::json;

    use super::{guard_formatter, HandleEventStatus, NotificationHandler};
    use crate::delivery::{DeliveryAdapter, DeliveryError};

    #[derive(Default)]
    struct RecordingDelivery {
        delivered: Mutex<Vec<SlackMessage>>,
        fail_with_status: Option<u16>,
    }

    #[async_trait]
    impl DeliveryAdapter for RecordingDelivery {
        fn adapter_name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(&self, message: &SlackMessage) -> Result<Option<String>, DeliveryError> {
            self.delivered
                .lock()
                .expect("delivered lock")
                .push(message.clone());
            match self.fail_with_status {
                Some(status) => Err(DeliveryError::Status {
                    status,
                    body: "invalid_payload".to_string(),
                }),
                None => Ok(Some("ok".to_string())),
            }
        }
    }

    fn handler(adapter: Arc<RecordingDelivery>) -> NotificationHandler {
        let ctx = RenderContext::new(RenderConfig::default()).expect("render context");
        NotificationHandler::new(Arc::new(ctx), adapter)
    }

    fn tag_push_payload() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "object_kind": "tag_push",
            "ref": "refs/tags/v1.0.0",
            "before": "0000000000000000000000000000000000000000",
            "after": "82b3d5ae55f7080f1e6022629cdb57bfae7cccc7",
            "user_id": 1,
            "user_name": "John Smith",
            "project": { "id": 1, "name": "Example", "web_url": "http://example.com/jsmith/example" }
        }))
        .expect("payload")
    }

    #[test]
    fn unit_status_serializes_with_status_tag() {
        assert_eq!(
            serde_json::to_value(HandleEventStatus::Ignored).expect("encode"),
            json!({ "status": "ignored" })
        );
        assert_eq!(
            serde_json::to_value(HandleEventStatus::Sent {
                message: SlackMessage::markdown("hi"),
                response: None,
            })
            .expect("encode"),
            json!({ "status": "sent", "message": { "type": "mrkdwn", "text": "hi" } })
        );
        assert_eq!(
            serde_json::to_value(HandleEventStatus::error("boom")).expect("encode"),
            json!({ "status": "error", "error": "boom" })
        );
    }

    #[test]
    fn regression_formatter_panic_becomes_error_outcome() {
        let outcome = guard_formatter("note", || panic!("unexpected payload shape"));
        assert_eq!(
            outcome,
            FormatOutcome::Error("formatter panicked on note event".to_string())
        );
        assert_eq!(
            guard_formatter("push", || FormatOutcome::Ignored),
            FormatOutcome::Ignored
        );
    }

    #[tokio::test]
    async fn functional_rendered_message_is_delivered_once() {
        let adapter = Arc::new(RecordingDelivery::default());
        let status = handler(adapter.clone())
            .handle_payload(&tag_push_payload())
            .await;
        let expected = SlackMessage::markdown(
            ":label: John Smith pushed tag `v1.0.0` to <http://example.com/jsmith/example|Example>.",
        );
        assert_eq!(
            status,
            HandleEventStatus::Sent {
                message: expected.clone(),
                response: Some("ok".to_string()),
            }
        );
        assert_eq!(*adapter.delivered.lock().expect("lock"), vec![expected]);
    }

    #[tokio::test]
    async fn functional_ignored_and_unrecognized_events_never_reach_delivery() {
        let adapter = Arc::new(RecordingDelivery::default());
        let handler = handler(adapter.clone());

        let ignored = handler
            .handle_payload(br#"{"object_kind":"pipeline","object_attributes":{"id":1,"ref":"main","status":"success"},"user":{"id":1,"name":"A"},"project":{"name":"P"}}"#)
            .await;
        assert_eq!(ignored, HandleEventStatus::Ignored);

        let unrecognized = handler
            .handle_payload(br#"{"object_kind":"deployment"}"#)
            .await;
        assert_eq!(
            unrecognized,
            HandleEventStatus::error("unhandled object_kind: deployment")
        );
        assert!(adapter.delivered.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn regression_delivery_failure_surfaces_as_error_status() {
        let adapter = Arc::new(RecordingDelivery {
            fail_with_status: Some(400),
            ..RecordingDelivery::default()
        });
        let status = handler(adapter).handle_payload(&tag_push_payload()).await;
        assert_eq!(
            status,
            HandleEventStatus::error("slack webhook returned status 400: invalid_payload")
        );
    }

    #[tokio::test]
    async fn regression_malformed_payload_is_an_error_status() {
        let adapter = Arc::new(RecordingDelivery::default());
        let status = handler(adapter).handle_payload(b"not json").await;
        match status {
            HandleEventStatus::Error { error } => {
                assert!(error.starts_with("invalid webhook payload: "), "{error}")
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }
}
