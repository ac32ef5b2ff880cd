//! GitLab event → Slack message rendering.
//!
//! Formatting is pure: every formatter takes a typed event plus a shared
//! [`RenderContext`] (user/group directory, mention toggles, note filters,
//! compiled markdown patterns) and returns an optional [`SlackMessage`].
//! [`route`] picks the formatter for an event and folds the result into a
//! [`FormatOutcome`].

pub mod directory;
mod format_build;
mod format_helpers;
mod format_issue;
mod format_merge_request;
mod format_note;
mod format_pipeline;
mod format_push;
mod format_wiki_page;
pub mod format_outcome;
pub mod labels;
pub mod render_config;
pub mod router;
pub mod slack_markdown;
pub mod slack_message;

#[cfg(test)]
mod test_support;

pub use directory::{Directory, DirectoryEntry, GitLabIdentity, NameOptions, SlackIdentity};
pub use format_outcome::{FormatError, FormatOutcome, FormatResult};
pub use labels::labels_markdown;
pub use render_config::{
    MentionConfig, MergeRequestMentions, NoteFilterConfig, PipelineMentions, RenderConfig,
    RenderConfigError, RenderContext, SONARQUBE_NOTE_PREFIX,
};
pub use router::route;
pub use slack_markdown::{quote_lines, SlackMarkdown};
pub use slack_message::{SlackMessage, SLACK_MARKDOWN_TYPE};
