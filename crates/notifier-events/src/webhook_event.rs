//! Typed GitLab webhook payloads, one per `object_kind`.
//!
//! Only the fields the notifier reads are modelled; everything else in the
//! payload is ignored by serde. Optional fields default so that payloads from
//! older GitLab releases still deserialize.

use serde::{Deserialize, Serialize};

use crate::gitlab_types::{Commit, Label, Project, Repository, User};

#[derive(Debug, Clone, PartialEq)]
/// Enumerates supported `WebhookEvent` values.
pub enum WebhookEvent {
    Build(BuildEvent),
    Issue(IssueEvent),
    MergeRequest(MergeRequestEvent),
    Note(NoteEvent),
    Pipeline(PipelineEvent),
    Push(PushEvent),
    TagPush(PushEvent),
    WikiPage(WikiPageEvent),
    /// Any `object_kind` this crate does not model.
    Unrecognized { object_kind: String },
}

impl WebhookEvent {
    pub fn object_kind(&self) -> &str {
        match self {
            Self::Build(_) => "build",
            Self::Issue(_) => "issue",
            Self::MergeRequest(_) => "merge_request",
            Self::Note(_) => "note",
            Self::Pipeline(_) => "pipeline",
            Self::Push(_) => "push",
            Self::TagPush(_) => "tag_push",
            Self::WikiPage(_) => "wiki_page",
            Self::Unrecognized { object_kind } => object_kind.as_str(),
        }
    }
}

// --------------------------------------------------------------------------
// build (job)
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildCommit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub sha: String,
    pub build_id: u64,
    pub build_name: String,
    #[serde(default)]
    pub build_stage: String,
    pub build_status: String,
    #[serde(default)]
    pub build_allow_failure: bool,
    #[serde(default)]
    pub build_failure_reason: Option<String>,
    #[serde(default)]
    pub pipeline_id: Option<u64>,
    #[serde(default)]
    pub project_id: u64,
    pub project_name: String,
    pub user: User,
    #[serde(default)]
    pub commit: Option<BuildCommit>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

// --------------------------------------------------------------------------
// issue
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueAttributes {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub author_id: u64,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl IssueAttributes {
    pub fn primary_assignee_id(&self) -> Option<u64> {
        self.assignee_id
            .or_else(|| self.assignee_ids.first().copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueEvent {
    /// `issue` or `confidential_issue`.
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: User,
    pub project: Project,
    pub object_attributes: IssueAttributes,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

// --------------------------------------------------------------------------
// merge_request
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequestAttributes {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub merge_status: Option<String>,
    pub author_id: u64,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub source_branch: String,
    #[serde(default)]
    pub target_branch: String,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl MergeRequestAttributes {
    /// Primary assignee, falling back to the first entry of `assignee_ids`.
    pub fn primary_assignee_id(&self) -> Option<u64> {
        self.assignee_id
            .or_else(|| self.assignee_ids.first().copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequestEvent {
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: User,
    pub project: Project,
    pub object_attributes: MergeRequestAttributes,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub reviewers: Vec<User>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

// --------------------------------------------------------------------------
// note (comment)
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteAttributes {
    #[serde(default)]
    pub id: u64,
    pub note: String,
    #[serde(default)]
    pub noteable_type: String,
    #[serde(default)]
    pub author_id: u64,
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteMergeRequest {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub title: String,
    /// Absent on several GitLab releases.
    #[serde(default)]
    pub url: Option<String>,
    pub author_id: u64,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub merge_status: String,
    #[serde(default)]
    pub source_branch: String,
    #[serde(default)]
    pub target_branch: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteIssue {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteSnippet {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteEvent {
    /// `note` or `confidential_note`.
    #[serde(default)]
    pub event_type: Option<String>,
    pub user: User,
    #[serde(default)]
    pub project_id: u64,
    pub project: Project,
    pub object_attributes: NoteAttributes,
    #[serde(default)]
    pub merge_request: Option<NoteMergeRequest>,
    #[serde(default)]
    pub commit: Option<Commit>,
    #[serde(default)]
    pub issue: Option<NoteIssue>,
    #[serde(default)]
    pub snippet: Option<NoteSnippet>,
}

// --------------------------------------------------------------------------
// pipeline
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineAttributes {
    pub id: u64,
    #[serde(default)]
    pub iid: Option<u64>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub tag: bool,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub source: Option<String>,
    pub status: String,
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineMergeRequest {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub iid: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source_branch: String,
    #[serde(default)]
    pub target_branch: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub merge_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineEvent {
    pub object_attributes: PipelineAttributes,
    #[serde(default)]
    pub merge_request: Option<PipelineMergeRequest>,
    pub user: User,
    pub project: Project,
    #[serde(default)]
    pub commit: Option<Commit>,
}

// --------------------------------------------------------------------------
// push / tag_push
// --------------------------------------------------------------------------

/// Shared shape of `push` and `tag_push` payloads; the actor is flattened into
/// `user_*` fields on both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushEvent {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub checkout_sha: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    #[serde(default)]
    pub user_username: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub project_id: u64,
    pub project: Project,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub total_commits_count: u64,
}

const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

impl PushEvent {
    /// True when the ref was removed (`after` is the all-zero sha).
    pub fn is_deletion(&self) -> bool {
        self.after == ZERO_SHA
    }

    /// Ref name with the `refs/heads/` or `refs/tags/` prefix removed.
    pub fn short_ref(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .or_else(|| self.git_ref.strip_prefix("refs/tags/"))
            .unwrap_or(self.git_ref.as_str())
    }
}

// --------------------------------------------------------------------------
// wiki_page
// --------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wiki {
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub path_with_namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiPageAttributes {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiPageEvent {
    pub user: User,
    pub project: Project,
    #[serde(default)]
    pub wiki: Option<Wiki>,
    pub object_attributes: WikiPageAttributes,
}
