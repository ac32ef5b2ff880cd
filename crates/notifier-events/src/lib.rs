//! GitLab webhook payload model for the notifier.
//!
//! Exposes one typed payload per `object_kind` and a parser that turns raw
//! request bytes into a [`WebhookEvent`]. Unknown kinds parse successfully into
//! [`WebhookEvent::Unrecognized`] so callers can report them instead of failing.
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use notifier_events::{parse_webhook_event, WebhookEvent};
//!
//! let event = parse_webhook_event(br#"{"object_kind": "deployment"}"#)?;
//! assert_eq!(event.object_kind(), "deployment");
//! assert!(matches!(event, WebhookEvent::Unrecognized { .. }));
//! # Ok(())
//! # }
//! ```

pub mod gitlab_types;
pub mod webhook_event;
pub mod webhook_payload;

pub use gitlab_types::{Commit, CommitAuthor, Label, Project, Repository, User};
pub use webhook_event::{
    BuildCommit, BuildEvent, IssueAttributes, IssueEvent, MergeRequestAttributes,
    MergeRequestEvent, NoteAttributes, NoteEvent, NoteIssue, NoteMergeRequest, NoteSnippet,
    PipelineAttributes, PipelineEvent, PipelineMergeRequest, PushEvent, WebhookEvent, Wiki,
    WikiPageAttributes, WikiPageEvent,
};
pub use webhook_payload::{parse_webhook_event, webhook_event_from_value, EventParseError};
