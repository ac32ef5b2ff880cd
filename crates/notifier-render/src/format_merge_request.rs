use notifier_events::MergeRequestEvent;
use tracing::debug;

use crate::format_helpers::{
    action_or_state, actor_name, assigned_suffix, author_possessive, merge_request_link,
};
use crate::format_outcome::{FormatError, FormatResult};
use crate::labels::labels_markdown;
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

pub(crate) fn format_merge_request_event(
    event: &MergeRequestEvent,
    ctx: &RenderContext,
) -> FormatResult {
    let mr = &event.object_attributes;
    let action = action_or_state(mr.action.as_deref(), mr.state.as_deref()).ok_or(
        FormatError::MissingAction {
            object_kind: "merge_request",
        },
    )?;
    debug!(action, iid = mr.iid, "formatting merge request event");

    let actor_id = event.user.id;
    let actor = actor_name(ctx, &event.user);
    let mr_link = merge_request_link(&mr.url, &event.project.name, mr.iid);
    let title = &mr.title;
    let mentions = &ctx.mentions().merge_request;

    let opened = |emoji: &str, verb: &str| {
        let labels = labels_markdown(&mr.labels);
        let assigned = assigned_suffix(
            ctx,
            actor_id,
            mr.primary_assignee_id(),
            &event.assignees,
        );
        format!(
            "{emoji} {actor} {verb} {mr_link} *{title}*{labels}{assigned}.\n`{}` → `{}`",
            mr.source_branch, mr.target_branch
        )
    };

    let text = match action {
        "open" | "opened" => opened(":blush:", "opened"),
        "reopen" | "reopened" => opened(":smirk:", "reopened"),
        "close" | "closed" => format!(":no_entry: {actor} closed {mr_link} *{title}*."),
        "merge" | "merged" => {
            let author = author_possessive(ctx, actor_id, mr.author_id, mentions.on_merged);
            format!(":tada: {actor} merged {author}{mr_link} *{title}*.")
        }
        "approve" | "approved" => {
            let author = author_possessive(ctx, actor_id, mr.author_id, mentions.on_approved);
            format!(":white_check_mark: {actor} approved {author}{mr_link} *{title}*.")
        }
        "unapprove" | "unapproved" => {
            let author = author_possessive(ctx, actor_id, mr.author_id, mentions.on_unapproved);
            format!("{actor} unapproved {author}{mr_link} *{title}*.")
        }
        "update" => return Ok(None),
        other => {
            return Err(FormatError::UnhandledAction {
                object_kind: "merge_request",
                action: other.to_string(),
            })
        }
    };
    Ok(Some(SlackMessage::markdown(text)))
}
