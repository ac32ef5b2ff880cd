use notifier_events::IssueEvent;
use tracing::debug;

use crate::format_helpers::{action_or_state, actor_name, assigned_suffix, issue_link};
use crate::format_outcome::{FormatError, FormatResult};
use crate::labels::labels_markdown;
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

pub(crate) fn format_issue_event(event: &IssueEvent, ctx: &RenderContext) -> FormatResult {
    let issue = &event.object_attributes;
    let action = action_or_state(issue.action.as_deref(), issue.state.as_deref())
        .ok_or(FormatError::MissingAction {
            object_kind: "issue",
        })?;
    debug!(action, iid = issue.iid, "formatting issue event");

    let actor = actor_name(ctx, &event.user);
    let link = issue_link(&issue.url, &event.project.name, issue.iid);
    let title = &issue.title;

    let opened = |emoji: &str, verb: &str| {
        let labels = labels_markdown(&issue.labels);
        let assigned = assigned_suffix(
            ctx,
            event.user.id,
            issue.primary_assignee_id(),
            &event.assignees,
        );
        format!("{emoji} {actor} {verb} {link} *{title}*{labels}{assigned}.")
    };

    let text = match action {
        "open" | "opened" => opened(":memo:", "opened"),
        "reopen" | "reopened" => opened(":smirk:", "reopened"),
        "close" | "closed" => format!(":white_check_mark: {actor} closed {link} *{title}*."),
        "update" => return Ok(None),
        other => {
            return Err(FormatError::UnhandledAction {
                object_kind: "issue",
                action: other.to_string(),
            })
        }
    };
    Ok(Some(SlackMessage::markdown(text)))
}
