use serde::{Deserialize, Serialize};

pub const SLACK_MARKDOWN_TYPE: &str = "mrkdwn";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Message body posted to a Slack incoming webhook.
pub struct SlackMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

impl SlackMessage {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            message_type: SLACK_MARKDOWN_TYPE.to_string(),
            text: text.into(),
        }
    }
}
