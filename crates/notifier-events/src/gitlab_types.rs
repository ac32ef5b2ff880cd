//! Building blocks shared by several GitLab webhook payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// GitLab account that triggered an event.
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub path_with_namespace: String,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl Project {
    /// Base URL used to resolve project-relative uploads.
    pub fn base_url(&self) -> &str {
        match self.homepage.as_deref() {
            Some(homepage) if !homepage.trim().is_empty() => homepage,
            _ => self.web_url.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub label_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    #[serde(default)]
    pub message: String,
    /// Older GitLab releases omit the title; callers fall back to `message`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub url: String,
    pub author: CommitAuthor,
}

impl Commit {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) => title,
            None => self.message.as_str(),
        }
    }

    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(index, _)| index)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}
