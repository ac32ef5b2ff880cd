use notifier_events::BuildEvent;

use crate::format_helpers::actor_name;
use crate::format_outcome::FormatResult;
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

pub(crate) fn format_build_event(event: &BuildEvent, ctx: &RenderContext) -> FormatResult {
    if event.build_status != "failed" || event.build_allow_failure {
        return Ok(None);
    }

    let actor = actor_name(ctx, &event.user);
    let homepage = event
        .repository
        .as_ref()
        .and_then(|repository| repository.homepage.as_deref())
        .filter(|homepage| !homepage.is_empty());
    let job = match homepage {
        Some(homepage) => format!(
            "<{homepage}/-/jobs/{}|job `{}`>",
            event.build_id, event.build_name
        ),
        None => format!("job `{}`", event.build_name),
    };
    let mut text = format!(
        ":x: {actor} {job} failed at stage `{}` on {} `{}`.",
        event.build_stage, event.project_name, event.git_ref
    );
    if let Some(reason) = event
        .build_failure_reason
        .as_deref()
        .filter(|reason| !reason.is_empty() && *reason != "unknown_failure")
    {
        text.push_str(&format!("\n- reason: `{reason}`"));
    }
    Ok(Some(SlackMessage::markdown(text)))
}
