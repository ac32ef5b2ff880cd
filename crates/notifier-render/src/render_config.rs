//! Render configuration and the shared, read-only context built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::{Directory, DirectoryEntry, NameOptions};
use crate::slack_markdown::SlackMarkdown;

/// Banner that opens SonarQube code-analysis comments.
pub const SONARQUBE_NOTE_PREFIX: &str = "## SonarQube Code Analysis";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Mention toggles for merge-request notifications.
pub struct MergeRequestMentions {
    pub on_comment: bool,
    pub on_assigned: bool,
    pub on_approved: bool,
    pub on_unapproved: bool,
    pub on_merged: bool,
    pub on_conflict: bool,
}

impl Default for MergeRequestMentions {
    fn default() -> Self {
        Self {
            on_comment: false,
            on_assigned: false,
            on_approved: false,
            on_unapproved: false,
            on_merged: false,
            on_conflict: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineMentions {
    pub on_failed: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Whether each notification class names people with a Slack mention token
/// or with a plain display name.
pub struct MentionConfig {
    pub merge_request: MergeRequestMentions,
    pub pipeline: PipelineMentions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NoteFilterConfig {
    /// Comments whose body starts with one of these are not quoted.
    pub ignore_prefixes: Vec<String>,
}

impl Default for NoteFilterConfig {
    fn default() -> Self {
        Self {
            ignore_prefixes: vec![SONARQUBE_NOTE_PREFIX.to_string()],
        }
    }
}

impl NoteFilterConfig {
    pub fn is_ignored(&self, note: &str) -> bool {
        self.ignore_prefixes
            .iter()
            .any(|prefix| note.starts_with(prefix.as_str()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub groups: Vec<DirectoryEntry>,
    pub users: Vec<DirectoryEntry>,
    pub mention: MentionConfig,
    pub note: NoteFilterConfig,
}

#[derive(Debug, Error)]
/// Enumerates supported `RenderConfigError` values.
pub enum RenderConfigError {
    #[error("failed to compile markdown pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("note.ignore_prefixes[{index}] must not be empty")]
    EmptyIgnorePrefix { index: usize },
}

/// Everything a formatter needs besides the event itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    directory: Directory,
    mentions: MentionConfig,
    note_filter: NoteFilterConfig,
    markdown: SlackMarkdown,
}

impl RenderContext {
    pub fn new(config: RenderConfig) -> Result<Self, RenderConfigError> {
        if let Some(index) = config
            .note
            .ignore_prefixes
            .iter()
            .position(|prefix| prefix.is_empty())
        {
            return Err(RenderConfigError::EmptyIgnorePrefix { index });
        }
        Ok(Self {
            directory: Directory::new(&config.groups, &config.users),
            mentions: config.mention,
            note_filter: config.note,
            markdown: SlackMarkdown::new()?,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn mentions(&self) -> &MentionConfig {
        &self.mentions
    }

    pub fn note_filter(&self) -> &NoteFilterConfig {
        &self.note_filter
    }

    pub fn resolve_name(&self, gitlab_user_id: u64, options: NameOptions<'_>) -> String {
        self.directory.resolve_name(gitlab_user_id, options)
    }

    pub fn to_slack_markdown(&self, text: &str, project_url: Option<&str>) -> String {
        self.markdown.translate(text, project_url, &self.directory)
    }
}
