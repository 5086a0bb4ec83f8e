// tests/e2e_display_http.rs
use axum::http::StatusCode;
use kb_display::application::ports::permission::ArticleAction;
use kb_display::application::ports::session::SessionMessageStore;
use kb_display::domain::article::WorkflowStatus;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{
    ADMIN_TOKEN, ArticleBuilder, EDITOR_TOKEN, GROUP_ID, MEMBER_TOKEN, PORTLET_ID, TestContext,
    assert_error_response, display_uri, get, issued_session, preferences_uri, preferences_with_default,
    read_json, send_json,
};

const SESSION: &str = "6f1c2a9e-3b4d-4c5e-8f70-112233445566";

#[tokio::test]
async fn health_returns_ok() {
    let ctx = TestContext::new();
    let resp = ctx.router().oneshot(get("/health", None, None)).await.unwrap();
    let (status, json) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn anonymous_render_returns_top_article_and_issues_session() {
    let ctx = TestContext::new();
    ctx.articles.seed(ArticleBuilder::new(1).priority(2.0).build());
    ctx.articles.seed(ArticleBuilder::new(2).priority(1.0).build());

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), None, None))
        .await
        .unwrap();
    let session = issued_session(&resp);
    let (status, json) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert!(session.is_some(), "a new session cookie should be issued");
    assert_eq!(json["view"], "/display/view.jsp");
    assert_eq!(json["status"], 0);
    assert_eq!(json["article"]["resource_prim_key"], 2);
    assert_eq!(json["errors"], json!([]));
    assert_eq!(json["hide_default_error_message"], false);
}

#[tokio::test]
async fn namespaced_parameters_take_precedence() {
    let ctx = TestContext::new();
    ctx.articles.seed(ArticleBuilder::new(5).build());
    ctx.articles.seed(ArticleBuilder::new(6).build());
    ctx.permissions.grant(None, 5, ArticleAction::View);
    ctx.permissions.grant(None, 6, ArticleAction::View);

    let query = format!("resourcePrimKey=5&_{PORTLET_ID}_resourcePrimKey=6");
    let resp = ctx
        .router()
        .oneshot(get(&display_uri(&query), None, Some(SESSION)))
        .await
        .unwrap();
    let (status, json) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["article"]["resource_prim_key"], 6);
}

#[tokio::test]
async fn missing_article_renders_error_template() {
    let ctx = TestContext::new();

    let resp = ctx
        .router()
        .oneshot(get(&display_uri("resourcePrimKey=404"), None, Some(SESSION)))
        .await
        .unwrap();
    let (status, json) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"], "/display/error.jsp");
    assert_eq!(json["errors"], json!(["no_such_article"]));
    assert_eq!(json["hide_default_error_message"], true);
    assert!(json["article"].is_null());
}

#[tokio::test]
async fn editor_with_update_permission_sees_drafts() {
    let ctx = TestContext::new();
    ctx.articles.seed(ArticleBuilder::new(5).version(1).build());
    ctx.articles.seed(
        ArticleBuilder::new(5)
            .version(2)
            .status(WorkflowStatus::Draft)
            .build(),
    );
    ctx.preferences
        .set(GROUP_ID, PORTLET_ID, preferences_with_default(5));
    ctx.permissions.grant(Some(2), 5, ArticleAction::View);
    ctx.permissions.grant(Some(2), 5, ArticleAction::Update);

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), Some(EDITOR_TOKEN), Some(SESSION)))
        .await
        .unwrap();
    let (status, json) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], -1);
    assert_eq!(json["article"]["version"], 2);
}

#[tokio::test]
async fn pending_session_errors_are_rendered_once() {
    let ctx = TestContext::new();
    ctx.sessions
        .add_error(SESSION, PORTLET_ID, "principal").await.unwrap();
    ctx.sessions
        .add_message(SESSION, PORTLET_ID, &format!("{PORTLET_ID}_hideDefaultErrorMessage"))
        .await
        .unwrap();

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), None, Some(SESSION)))
        .await
        .unwrap();
    let (_, json) = read_json(resp).await;
    assert_eq!(json["view"], "/display/error.jsp");
    assert_eq!(json["errors"], json!(["principal"]));
    assert_eq!(json["hide_default_error_message"], true);

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), None, Some(SESSION)))
        .await
        .unwrap();
    let (_, json) = read_json(resp).await;
    assert_eq!(json["view"], "/display/view.jsp");
    assert_eq!(json["errors"], json!([]));
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), Some("bad-token"), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn non_positive_group_is_a_bad_request() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(get("/api/v1/sites/0/kb-display/kbdisplay", None, None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn permission_oracle_failure_is_a_server_error() {
    let ctx = TestContext::new();
    ctx.preferences
        .set(GROUP_ID, PORTLET_ID, preferences_with_default(5));
    ctx.permissions.fail_with("oracle unavailable");

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), None, Some(SESSION)))
        .await
        .unwrap();
    assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    )
    .await;
}

/* ---------------------------- preferences ---------------------------- */

#[tokio::test]
async fn admin_configures_default_article() {
    let ctx = TestContext::new();
    ctx.articles.seed(ArticleBuilder::new(9).build());
    ctx.permissions.grant(None, 9, ArticleAction::View);

    let resp = ctx
        .router()
        .oneshot(send_json(
            "PUT",
            &preferences_uri(),
            Some(ADMIN_TOKEN),
            None,
            json!({ "resource_prim_key": 9 }),
        ))
        .await
        .unwrap();
    let (status, json) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resource_prim_key"], 9);

    let resp = ctx
        .router()
        .oneshot(get(&preferences_uri(), None, None))
        .await
        .unwrap();
    let (_, json) = read_json(resp).await;
    assert_eq!(json["values"]["resourcePrimKey"], "9");

    let resp = ctx
        .router()
        .oneshot(get(&display_uri(""), None, Some(SESSION)))
        .await
        .unwrap();
    let (_, json) = read_json(resp).await;
    assert_eq!(json["article"]["resource_prim_key"], 9);
}

#[tokio::test]
async fn members_cannot_configure() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(send_json(
            "PUT",
            &preferences_uri(),
            Some(MEMBER_TOKEN),
            None,
            json!({ "resource_prim_key": 9 }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn configuring_requires_a_token() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(send_json(
            "PUT",
            &preferences_uri(),
            None,
            None,
            json!({ "resource_prim_key": 9 }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}
