use notifier_events::{Label, Project, User};

use crate::directory::{DirectoryEntry, GitLabIdentity, SlackIdentity};
use crate::render_config::{
    MentionConfig, MergeRequestMentions, NoteFilterConfig, PipelineMentions, RenderConfig,
    RenderContext,
};

pub(crate) fn label(title: &str) -> Label {
    Label {
        id: 0,
        title: title.to_string(),
        color: "#428BCA".to_string(),
        description: None,
        label_type: None,
    }
}

pub(crate) fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.to_ascii_lowercase(),
        email: None,
        avatar_url: None,
    }
}

pub(crate) fn project() -> Project {
    Project {
        id: 1,
        name: "Gitlab Test".to_string(),
        description: None,
        web_url: "http://example.com/gitlab-org/gitlab-test".to_string(),
        namespace: "gitlab-org".to_string(),
        path_with_namespace: "gitlab-org/gitlab-test".to_string(),
        default_branch: Some("master".to_string()),
        homepage: Some("http://example.com/gitlab-org/gitlab-test".to_string()),
    }
}

fn entry(id: u64, name: &str, slack_id: &str, slack_name: &str) -> DirectoryEntry {
    DirectoryEntry {
        gitlab: GitLabIdentity {
            id,
            name: name.to_string(),
        },
        slack: Some(SlackIdentity {
            id: slack_id.to_string(),
            name: Some(slack_name.to_string()),
        }),
    }
}

/// Mentions switched off everywhere.
pub(crate) fn quiet_mentions() -> MentionConfig {
    MentionConfig {
        merge_request: MergeRequestMentions {
            on_conflict: false,
            ..MergeRequestMentions::default()
        },
        pipeline: PipelineMentions::default(),
    }
}

/// Directory with admin (1), user1 (6) and user2 (51) mapped, plus group `dev`.
pub(crate) fn context_with(mentions: MentionConfig) -> RenderContext {
    RenderContext::new(RenderConfig {
        groups: vec![entry(100, "dev", "A01234567", "dev")],
        users: vec![
            entry(1, "admin", "U0000000001", "Admin"),
            entry(6, "user1", "U0123456789", "User1"),
            entry(51, "user2", "U1123456789", "User2"),
        ],
        mention: mentions,
        note: NoteFilterConfig::default(),
    })
    .expect("render context")
}

pub(crate) fn context() -> RenderContext {
    context_with(quiet_mentions())
}
