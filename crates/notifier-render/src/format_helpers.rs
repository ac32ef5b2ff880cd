//! Fragments shared by several formatters.

use notifier_events::User;

use crate::directory::NameOptions;
use crate::render_config::RenderContext;

/// Name of the acting user; never a mention token.
pub(crate) fn actor_name(ctx: &RenderContext, user: &User) -> String {
    ctx.resolve_name(user.id, NameOptions::default().or_default(&user.name))
}

pub(crate) fn merge_request_link(url: &str, project_name: &str, iid: u64) -> String {
    format!("<{url}|{project_name} MR !{iid}>")
}

pub(crate) fn issue_link(url: &str, project_name: &str, iid: u64) -> String {
    format!("<{url}|{project_name} issue #{iid}>")
}

pub(crate) fn project_link(web_url: &str, project_name: &str) -> String {
    format!("<{web_url}|{project_name}>")
}

/// `"<author>'s "` when the author is someone other than the actor.
pub(crate) fn author_possessive(
    ctx: &RenderContext,
    actor_id: u64,
    author_id: u64,
    mention: bool,
) -> String {
    if actor_id == author_id {
        return String::new();
    }
    possessive(ctx, author_id, mention)
}

/// `"<user>'s "` unconditionally.
pub(crate) fn possessive(ctx: &RenderContext, gitlab_user_id: u64, mention: bool) -> String {
    format!(
        "{}'s ",
        ctx.resolve_name(gitlab_user_id, NameOptions::mention(mention))
    )
}

/// `" and assigned to <assignee>"` when an assignee other than the actor exists.
pub(crate) fn assigned_suffix(
    ctx: &RenderContext,
    actor_id: u64,
    assignee_id: Option<u64>,
    assignees: &[User],
) -> String {
    let Some(assignee_id) = assignee_id.filter(|id| *id != 0 && *id != actor_id) else {
        return String::new();
    };
    let mut options = NameOptions::mention(ctx.mentions().merge_request.on_assigned);
    if let Some(first) = assignees.first() {
        options = options.or_default(&first.name);
    }
    format!(" and assigned to {}", ctx.resolve_name(assignee_id, options))
}

/// First non-empty of `action` and `state`.
pub(crate) fn action_or_state<'a>(
    action: Option<&'a str>,
    state: Option<&'a str>,
) -> Option<&'a str> {
    action
        .filter(|value| !value.is_empty())
        .or_else(|| state.filter(|value| !value.is_empty()))
}
