use notifier_events::WikiPageEvent;

use crate::format_helpers::actor_name;
use crate::format_outcome::{FormatError, FormatResult};
use crate::render_config::RenderContext;
use crate::slack_message::SlackMessage;

pub(crate) fn format_wiki_page_event(event: &WikiPageEvent, ctx: &RenderContext) -> FormatResult {
    let page = &event.object_attributes;
    let verb = match page.action.as_str() {
        "create" => "created",
        "update" => "updated",
        "delete" => "deleted",
        other => {
            return Err(FormatError::UnhandledAction {
                object_kind: "wiki_page",
                action: other.to_string(),
            })
        }
    };
    let actor = actor_name(ctx, &event.user);
    Ok(Some(SlackMessage::markdown(format!(
        ":book: {actor} {verb} wiki page <{}|{}> in {}.",
        page.url, page.title, event.project.name
    ))))
}
