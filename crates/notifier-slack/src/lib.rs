//! Delivery of rendered notifications to Slack.
//!
//! [`NotificationHandler`] is the per-request entry point: it routes a parsed
//! event, delivers the resulting message through a [`DeliveryAdapter`] and
//! reports the outcome as a [`HandleEventStatus`].

pub mod delivery;
pub mod handler;
pub mod slack_webhook_client;

pub use delivery::{DeliveryAdapter, DeliveryError, DryRunDelivery};
pub use handler::{HandleEventStatus, NotificationHandler};
pub use slack_webhook_client::{SlackWebhookClient, DEFAULT_REQUEST_TIMEOUT_MS};
