use notifier_events::PushEvent;

use crate::directory::NameOptions;
use crate::format_helpers::project_link;
use crate::format_outcome::FormatResult;
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

/// Commits listed under a push summary before the remainder is collapsed.
pub(crate) const MAX_LISTED_COMMITS: usize = 5;

fn push_actor(ctx: &RenderContext, event: &PushEvent) -> String {
    ctx.resolve_name(
        event.user_id,
        NameOptions::default().or_default(&event.user_name),
    )
}

pub(crate) fn format_push_event(event: &PushEvent, ctx: &RenderContext) -> FormatResult {
    let actor = push_actor(ctx, event);
    let project = project_link(&event.project.web_url, &event.project.name);
    let branch = event.short_ref();

    if event.is_deletion() {
        return Ok(Some(SlackMessage::markdown(format!(
            ":wastebasket: {actor} deleted branch `{branch}` in {project}."
        ))));
    }

    let listed = event.commits.len();
    let total = usize::try_from(event.total_commits_count)
        .unwrap_or(usize::MAX)
        .max(listed);
    if total == 0 {
        return Ok(None);
    }

    let noun = if total == 1 { "commit" } else { "commits" };
    let mut lines = vec![format!(
        ":arrow_up: {actor} pushed {total} {noun} to {project} `{branch}`."
    )];
    for commit in event.commits.iter().take(MAX_LISTED_COMMITS) {
        let title = commit.display_title().lines().next().unwrap_or_default();
        lines.push(format!("- <{}|`{}`> {title}", commit.url, commit.short_id()));
    }
    let shown = listed.min(MAX_LISTED_COMMITS);
    if total > shown {
        lines.push(format!("- ...and {} more", total - shown));
    }
    Ok(Some(SlackMessage::markdown(lines.join("\n"))))
}

pub(crate) fn format_tag_push_event(event: &PushEvent, ctx: &RenderContext) -> FormatResult {
    let actor = push_actor(ctx, event);
    let project = project_link(&event.project.web_url, &event.project.name);
    let tag = event.short_ref();
    let text = if event.is_deletion() {
        format!(":wastebasket: {actor} deleted tag `{tag}` in {project}.")
    } else {
        format!(":label: {actor} pushed tag `{tag}` to {project}.")
    };
    Ok(Some(SlackMessage::markdown(text)))
}
