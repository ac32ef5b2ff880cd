//! HTTP front end that accepts GitLab webhooks and answers with the
//! per-request notification status.

pub mod webhook_server;

pub use webhook_server::{
    build_notifier_router, run_notifier_server, NotifierServerConfig, HEALTHZ_ENDPOINT,
    ROOT_ENDPOINT, WEBHOOK_ENDPOINT,
};
