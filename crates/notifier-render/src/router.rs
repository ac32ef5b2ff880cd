use notifier_events::WebhookEvent;
use tracing::debug;

use crate::format_build::format_build_event;
use crate::format_issue::format_issue_event;
use crate::format_merge_request::format_merge_request_event;
use crate::format_note::format_note_event;
use crate::format_outcome::FormatOutcome;
use crate::format_pipeline::format_pipeline_event;
use crate::format_push::{format_push_event, format_tag_push_event};
use crate::format_wiki_page::format_wiki_page_event;
use crate::render_config::RenderContext;

/// Dispatches `event` to the formatter for its kind.
pub fn route(event: &WebhookEvent, ctx: &RenderContext) -> FormatOutcome {
    debug!(object_kind = event.object_kind(), "routing webhook event");
    let result = match event {
        WebhookEvent::Build(build) => format_build_event(build, ctx),
        WebhookEvent::Issue(issue) => format_issue_event(issue, ctx),
        WebhookEvent::MergeRequest(mr) => format_merge_request_event(mr, ctx),
        WebhookEvent::Note(note) => format_note_event(note, ctx),
        WebhookEvent::Pipeline(pipeline) => format_pipeline_event(pipeline, ctx),
        WebhookEvent::Push(push) => format_push_event(push, ctx),
        WebhookEvent::TagPush(tag_push) => format_tag_push_event(tag_push, ctx),
        WebhookEvent::WikiPage(page) => format_wiki_page_event(page, ctx),
        WebhookEvent::Unrecognized { object_kind } => {
            return FormatOutcome::Error(format!("unhandled object_kind: {object_kind}"));
        }
    };
    FormatOutcome::from(result)
}
