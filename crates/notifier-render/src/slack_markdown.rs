//! GitLab markdown → Slack mrkdwn translation.
//!
//! Order matters: image links are rewritten before plain links because the
//! image syntax contains the link syntax, and links are rewritten before
//! `@mention` substitution.
//!
//! Mention substitution is a plain string replace. A GitLab name that appears
//! inside an already rewritten URL, or that is a prefix of a longer name
//! (`@dev` vs `@devops`), is replaced as well.

use regex::{Captures, Regex};

use crate::directory::{slack_group_mention, slack_user_mention, Directory};

const IMAGE_LINK_PATTERN: &str = r"!\[([^\]]*)]\(([^)]+)\)";
const LINK_PATTERN: &str = r"\[([^\]]*)]\(([^)]+)\)";

#[derive(Debug, Clone)]
pub struct SlackMarkdown {
    image_link: Regex,
    link: Regex,
}

impl SlackMarkdown {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            image_link: Regex::new(IMAGE_LINK_PATTERN)?,
            link: Regex::new(LINK_PATTERN)?,
        })
    }

    /// Rewrite `text` for Slack. `project_url` resolves relative image uploads;
    /// without it image links are treated as ordinary links.
    pub fn translate(&self, text: &str, project_url: Option<&str>, directory: &Directory) -> String {
        let mut result = text.to_string();

        if let Some(project_url) = project_url.filter(|url| !url.is_empty()) {
            result = self
                .image_link
                .replace_all(&result, |caps: &Captures<'_>| {
                    format!("<{}{}|{}>", project_url, &caps[2], &caps[1])
                })
                .into_owned();
        }
        result = self.link.replace_all(&result, "<${2}|${1}>").into_owned();

        for (gitlab_group, slack_group_id) in directory.group_mentions() {
            result = result.replace(
                &format!("@{gitlab_group}"),
                &slack_group_mention(slack_group_id),
            );
        }
        for (gitlab_user, slack_user_id) in directory.user_mentions() {
            result = result.replace(
                &format!("@{gitlab_user}"),
                &slack_user_mention(slack_user_id),
            );
        }
        result
    }
}

/// Prefix every line with a Slack block-quote marker.
pub fn quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
