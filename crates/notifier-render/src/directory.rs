//! GitLab ↔ Slack identity directory.
//!
//! Built once from configuration and shared read-only. Lookups by GitLab user
//! id drive display names; the name → Slack id projections drive `@mention`
//! substitution in comment bodies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitLabIdentity {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlackIdentity {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One user or group mapping from configuration.
pub struct DirectoryEntry {
    pub gitlab: GitLabIdentity,
    #[serde(default)]
    pub slack: Option<SlackIdentity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Options for [`Directory::resolve_name`].
pub struct NameOptions<'a> {
    pub mention: bool,
    pub default_name: Option<&'a str>,
}

impl<'a> NameOptions<'a> {
    pub fn mention(mention: bool) -> Self {
        Self {
            mention,
            default_name: None,
        }
    }

    pub fn or_default(self, default_name: &'a str) -> Self {
        Self {
            default_name: Some(default_name),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    users_by_id: HashMap<u64, DirectoryEntry>,
    user_mentions: Vec<(String, String)>,
    group_mentions: Vec<(String, String)>,
}

impl Directory {
    pub fn new(groups: &[DirectoryEntry], users: &[DirectoryEntry]) -> Self {
        let users_by_id = users
            .iter()
            .map(|user| (user.gitlab.id, user.clone()))
            .collect::<HashMap<_, _>>();
        Self {
            users_by_id,
            user_mentions: mention_projection(users),
            group_mentions: mention_projection(groups),
        }
    }

    pub fn user(&self, gitlab_user_id: u64) -> Option<&DirectoryEntry> {
        self.users_by_id.get(&gitlab_user_id)
    }

    /// Display name (or mention token) for a GitLab user id.
    ///
    /// A configured mapping always wins over `default_name`; the default only
    /// applies to ids missing from the directory.
    pub fn resolve_name(&self, gitlab_user_id: u64, options: NameOptions<'_>) -> String {
        let Some(user) = self.user(gitlab_user_id) else {
            return match options.default_name {
                Some(name) => name.to_string(),
                None => format!("user#{gitlab_user_id}"),
            };
        };
        let Some(slack) = &user.slack else {
            return user.gitlab.name.clone();
        };
        if options.mention {
            return slack_user_mention(&slack.id);
        }
        slack
            .name
            .clone()
            .unwrap_or_else(|| user.gitlab.name.clone())
    }

    /// GitLab user name → Slack user id, mapped users only, in config order.
    pub fn user_mentions(&self) -> &[(String, String)] {
        &self.user_mentions
    }

    /// GitLab group name → Slack user-group id, mapped groups only, in config order.
    pub fn group_mentions(&self) -> &[(String, String)] {
        &self.group_mentions
    }
}

pub fn slack_user_mention(slack_user_id: &str) -> String {
    format!("<@{slack_user_id}>")
}

pub fn slack_group_mention(slack_group_id: &str) -> String {
    format!("<!subteam^{slack_group_id}>")
}

fn mention_projection(entries: &[DirectoryEntry]) -> Vec<(String, String)> {
    let mut projection: Vec<(String, String)> = Vec::new();
    for entry in entries {
        let Some(slack) = &entry.slack else {
            continue;
        };
        if slack.id.trim().is_empty() {
            continue;
        }
        // Later entries for the same GitLab name replace earlier ones in place.
        match projection
            .iter_mut()
            .find(|(gitlab_name, _)| *gitlab_name == entry.gitlab.name)
        {
            Some(existing) => existing.1 = slack.id.clone(),
            None => projection.push((entry.gitlab.name.clone(), slack.id.clone())),
        }
    }
    projection
}
