use notifier_events::PipelineEvent;

use crate::directory::NameOptions;
use crate::format_outcome::FormatResult;
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

const FAILED_STATUS: &str = "failed";

/// Only failed pipelines are announced. The triggering user is named only when
/// the pipeline belongs to a merge request.
pub(crate) fn format_pipeline_event(event: &PipelineEvent, ctx: &RenderContext) -> FormatResult {
    let pipeline = &event.object_attributes;
    if pipeline.status != FAILED_STATUS {
        return Ok(None);
    }

    let project = &event.project;
    let actor = match &event.merge_request {
        Some(_) => {
            let options = NameOptions::mention(ctx.mentions().pipeline.on_failed)
                .or_default(&event.user.name);
            format!("{} ", ctx.resolve_name(event.user.id, options))
        }
        None => String::new(),
    };
    let mut text = format!(
        ":fire: {actor}Build pipeline failed on <{}|{} project> `{}`.",
        project.web_url, project.name, pipeline.git_ref
    );
    if let Some(commit) = &event.commit {
        text.push_str(&format!(
            "\n- `{}<{}>` *{}*",
            commit.author.name,
            commit.author.email,
            commit.display_title()
        ));
    }
    Ok(Some(SlackMessage::markdown(text)))
}
