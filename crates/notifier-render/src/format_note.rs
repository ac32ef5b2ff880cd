use notifier_events::{NoteEvent, NoteMergeRequest};
use tracing::debug;

use crate::format_helpers::{actor_name, author_possessive, merge_request_link, possessive};
use crate::format_outcome::{FormatError, FormatResult};
use crate::labels::labels_markdown;
use crate::render_config::RenderContext;
use crate::slack_markdown::quote_lines;
use crate::slack_message::SlackMessage;

/// GitLab `merge_status` of a merge request with conflicting changes.
pub(crate) const MERGE_CONFLICT_STATUS: &str = "cannot_be_merged";

const COMMENT_EMOJI: &str = ":speech_balloon:";
const CONFLICT_BANNER: &str = ":boom:*Merge conflict*:boom:";

pub(crate) fn format_note_event(event: &NoteEvent, ctx: &RenderContext) -> FormatResult {
    let note = &event.object_attributes;
    let suppressed = ctx.note_filter().is_ignored(&note.note);
    debug!(
        noteable_type = note.noteable_type.as_str(),
        suppressed, "formatting note event"
    );

    // Merge request comments take precedence over every other subject.
    if let Some(mr) = &event.merge_request {
        return Ok(format_merge_request_note(event, mr, suppressed, ctx));
    }
    if suppressed {
        return Ok(None);
    }

    let actor = actor_name(ctx, &event.user);
    let project_name = &event.project.name;
    let commented = format!("{COMMENT_EMOJI} {actor} <{}|commented> on", note.url);

    let text = if let Some(commit) = &event.commit {
        let commit_id = note
            .commit_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(commit.id.as_str());
        format!(
            "{commented} {project_name} <{}|`{commit_id}` commit>.\n{}",
            commit.url,
            quote_note(event, ctx)
        )
    } else if let Some(issue) = &event.issue {
        format!(
            "{commented} {project_name} issue *{}*.\n{}",
            issue.title,
            quote_note(event, ctx)
        )
    } else if let Some(snippet) = &event.snippet {
        format!(
            "{commented} {project_name} snippet *{}*.\n{}",
            snippet.title,
            quote_note(event, ctx)
        )
    } else {
        return Err(FormatError::UnhandledComment);
    };
    Ok(Some(SlackMessage::markdown(text)))
}

fn format_merge_request_note(
    event: &NoteEvent,
    mr: &NoteMergeRequest,
    suppressed: bool,
    ctx: &RenderContext,
) -> Option<SlackMessage> {
    let mr_url = match mr.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("{}/-/merge_requests/{}", event.project.web_url, mr.iid),
    };
    let mr_link = merge_request_link(&mr_url, &event.project.name, mr.iid);
    let labels = labels_markdown(&mr.labels);
    let title = &mr.title;
    let conflict = mr.merge_status == MERGE_CONFLICT_STATUS;
    let mentions = &ctx.mentions().merge_request;

    if suppressed {
        // Suppression drops the comment body, never the conflict notice.
        if !conflict {
            return None;
        }
        let author = possessive(ctx, mr.author_id, mentions.on_conflict);
        return Some(SlackMessage::markdown(format!(
            "{COMMENT_EMOJI} {CONFLICT_BANNER} on {author}{mr_link} *{title}*{labels}."
        )));
    }

    let actor_id = event.user.id;
    let actor = actor_name(ctx, &event.user);
    let note_url = &event.object_attributes.url;
    let quote = quote_note(event, ctx);
    let text = if conflict {
        // The author is always named on a conflict, even on their own comment.
        let author = possessive(ctx, mr.author_id, mentions.on_conflict);
        format!(
            "{COMMENT_EMOJI} [{CONFLICT_BANNER}] {actor} <{note_url}|commented> on {author}{mr_link} *{title}*{labels}.\n{quote}"
        )
    } else {
        let author = author_possessive(ctx, actor_id, mr.author_id, mentions.on_comment);
        format!(
            "{COMMENT_EMOJI} {actor} <{note_url}|commented> on {author}{mr_link} *{title}*{labels}.\n{quote}"
        )
    };
    Some(SlackMessage::markdown(text))
}

fn quote_note(event: &NoteEvent, ctx: &RenderContext) -> String {
    let translated = ctx.to_slack_markdown(
        &event.object_attributes.note,
        Some(event.project.base_url()),
    );
    quote_lines(&translated)
}
