use std::path::{Path, PathBuf};
use std::sync::Arc;

use httpmock::prelude::*;
use notifier_cli::load_file_config;
use notifier_events::parse_webhook_event;
use notifier_render::{route, FormatOutcome, RenderContext, SlackMessage};
use notifier_slack::{HandleEventStatus, NotificationHandler, SlackWebhookClient};
use serde_json::json;

const SLACK_HOOK_PATH: &str = "/services/T000/B000/XXX";

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("read fixture")
}

fn render_context() -> Arc<RenderContext> {
    let config = load_file_config(Some(&fixture_path("notifier.toml"))).expect("load config");
    Arc::new(RenderContext::new(config.render).expect("render context"))
}

fn slack_handler(server: &MockServer) -> NotificationHandler {
    let client = SlackWebhookClient::new(&server.url(SLACK_HOOK_PATH), 2_000).expect("client");
    NotificationHandler::new(render_context(), Arc::new(client))
}

async fn assert_fixture_sent(fixture: &str, expected_text: &str) {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path(SLACK_HOOK_PATH)
            .json_body(json!({ "type": "mrkdwn", "text": expected_text }));
        then.status(200).body("ok");
    });

    let status = slack_handler(&server)
        .handle_payload(&read_fixture(fixture))
        .await;
    assert_eq!(
        status,
        HandleEventStatus::Sent {
            message: SlackMessage::markdown(expected_text),
            response: Some("ok".to_string()),
        },
        "fixture {fixture}"
    );
    hook.assert();
}

async fn assert_fixture_not_sent(fixture: &str, expected: HandleEventStatus) {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path(SLACK_HOOK_PATH);
        then.status(200).body("ok");
    });

    let status = slack_handler(&server)
        .handle_payload(&read_fixture(fixture))
        .await;
    assert_eq!(status, expected, "fixture {fixture}");
    assert_eq!(hook.calls(), 0, "fixture {fixture} must not reach slack");
}

#[tokio::test]
async fn integration_merge_request_fixtures_are_delivered() {
    assert_fixture_sent(
        "mr-open.json",
        ":blush: Admin opened <http://example.com/diaspora/merge_requests/1|Gitlab Test MR !1> *MS-Viewport*[`API`] and assigned to User1.\n`ms-viewport` → `master`",
    )
    .await;
    assert_fixture_sent(
        "mr-approve.json",
        ":white_check_mark: Admin approved User2's <https://example.com/diaspora/merge_requests/1|Gitlab Test MR !1> *MS-Viewport*.",
    )
    .await;
    assert_fixture_sent(
        "mr-merge.json",
        ":tada: Admin merged User2's <http://example.com/diaspora/merge_requests/1|Gitlab Test MR !1> *MS-Viewport*.",
    )
    .await;
}

#[tokio::test]
async fn integration_note_fixtures_cover_conflict_and_suppression() {
    assert_fixture_sent(
        "note-mr-conflict.json",
        ":speech_balloon: [:boom:*Merge conflict*:boom:] Admin <http://example.com/gitlab-org/gitlab-test/merge_requests/1#note_1244|commented> on User2's <http://example.com/gitlab-org/gitlab-test/-/merge_requests/1|Gitlab Test MR !1> *Tempora et eos debitis quae laborum et.*[`Afterpod`,`Element`].\n> This MR needs work.",
    )
    .await;
    assert_fixture_sent(
        "note-mr-sonarqube-conflict.json",
        ":speech_balloon: :boom:*Merge conflict*:boom: on User1's <http://example.com/gitlab-org/gitlab-test/-/merge_requests/1|Gitlab Test MR !1> *Tempora et eos debitis quae laborum et.*[`Afterpod`,`Element`].",
    )
    .await;
    assert_fixture_not_sent(
        "note-mr-sonarqube-can-be-merged.json",
        HandleEventStatus::Ignored,
    )
    .await;
}

#[tokio::test]
async fn integration_pipeline_issue_and_push_fixtures_are_delivered() {
    assert_fixture_sent(
        "pipeline-failed.json",
        ":fire: Admin Build pipeline failed on <http://192.168.64.1:3005/gitlab-org/gitlab-test|Gitlab Test project> `master`.\n- `User<user@gitlab.com>` *test*",
    )
    .await;
    assert_fixture_sent(
        "issue-open.json",
        ":memo: Admin opened <http://example.com/diaspora/issues/23|Gitlab Test issue #23> *New API: create/update/delete file*[`API`] and assigned to User2.",
    )
    .await;
    assert_fixture_sent(
        "push.json",
        ":arrow_up: User1 pushed 2 commits to <http://example.com/mike/diaspora|Diaspora> `master`.\n- <http://example.com/mike/diaspora/commit/b6568db1bc1dcd7f8b4d5a946b0b91f9dacd7327|`b6568db1`> Update Catalan translation to e38cb41.\n- <http://example.com/mike/diaspora/commit/da1560886d4f094c3e6c9ef40349f7d38b5d27d7|`da156088`> fixed readme",
    )
    .await;
}

#[tokio::test]
async fn regression_ignored_and_unrecognized_fixtures_never_reach_slack() {
    assert_fixture_not_sent("mr-update.json", HandleEventStatus::Ignored).await;
    assert_fixture_not_sent(
        "deployment.json",
        HandleEventStatus::error("unhandled object_kind: deployment"),
    )
    .await;
}

#[tokio::test]
async fn regression_slack_rejection_is_reported_as_error() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path(SLACK_HOOK_PATH);
        then.status(500).body("rollup_error");
    });

    let status = slack_handler(&server)
        .handle_payload(&read_fixture("mr-merge.json"))
        .await;
    assert_eq!(
        status,
        HandleEventStatus::error("slack webhook returned status 500: rollup_error")
    );
    assert_eq!(hook.calls(), 1);
}

#[test]
fn functional_every_fixture_routes_to_exactly_one_outcome() {
    let ctx = render_context();
    let fixtures_dir = fixture_path("");
    let mut routed = 0;
    for entry in std::fs::read_dir(&fixtures_dir).expect("read fixtures dir") {
        let path = entry.expect("fixture entry").path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let raw = std::fs::read(&path).expect("read fixture");
        let event = parse_webhook_event(&raw).expect("fixture parses");
        match route(&event, &ctx) {
            FormatOutcome::Ignored | FormatOutcome::Message(_) => {}
            FormatOutcome::Error(error) => {
                assert_eq!(event.object_kind(), "deployment", "{}: {error}", path.display())
            }
        }
        routed += 1;
    }
    assert_eq!(routed, 11);
}
