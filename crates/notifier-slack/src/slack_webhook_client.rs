//! Client for Slack incoming webhooks.

use std::time::Duration;

use async_trait::async_trait;
use notifier_render::SlackMessage;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::{info, warn};

use crate::delivery::{DeliveryAdapter, DeliveryError};

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const ERROR_BODY_MAX_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(webhook_url: &str, request_timeout_ms: u64) -> Result<Self, DeliveryError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("gitlab-slack-notifier"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .build()?;
        Ok(Self {
            http,
            webhook_url: webhook_url.trim().to_string(),
        })
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[async_trait]
impl DeliveryAdapter for SlackWebhookClient {
    fn adapter_name(&self) -> &'static str {
        "slack-webhook"
    }

    async fn deliver(&self, message: &SlackMessage) -> Result<Option<String>, DeliveryError> {
        let body = serde_json::to_vec(message)?;
        let response = self.http.post(&self.webhook_url).body(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "slack webhook rejected message");
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body: truncate_for_error(&text, ERROR_BODY_MAX_CHARS),
            });
        }
        info!(status = status.as_u16(), "slack webhook accepted message");
        Ok(Some(text))
    }
}

fn truncate_for_error(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated = value.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use notifier_render::SlackMessage;
    use serde_json::json;

    use super::{truncate_for_error, SlackWebhookClient};
    use crate::delivery::{DeliveryAdapter, DeliveryError};

    #[test]
    fn unit_truncate_for_error_appends_ellipsis() {
        assert_eq!(truncate_for_error("abc", 5), "abc");
        assert_eq!(truncate_for_error("abcdef", 3), "abc...");
    }

    #[tokio::test]
    async fn integration_client_posts_markdown_json_and_returns_body() {
        let server = MockServer::start();
        let hook = server.mock(|when, then| {
            when.method(POST)
                .path("/services/T000/B000/XXX")
                .header("content-type", "application/json; charset=utf-8")
                .json_body(json!({ "type": "mrkdwn", "text": "hello *world*" }));
            then.status(200).body("ok");
        });

        let client = SlackWebhookClient::new(&server.url("/services/T000/B000/XXX"), 2_000)
            .expect("client");
        let response = client
            .deliver(&SlackMessage::markdown("hello *world*"))
            .await
            .expect("delivered");
        assert_eq!(response.as_deref(), Some("ok"));
        hook.assert();
    }

    #[tokio::test]
    async fn regression_non_success_status_is_a_delivery_error() {
        let server = MockServer::start();
        let hook = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(404).body("no_service");
        });

        let client = SlackWebhookClient::new(&server.url("/hook"), 2_000).expect("client");
        let error = client
            .deliver(&SlackMessage::markdown("hello"))
            .await
            .expect_err("404 must fail");
        assert!(matches!(
            error,
            DeliveryError::Status { status: 404, ref body } if body == "no_service"
        ));
        assert_eq!(hook.calls(), 1);
    }
}
