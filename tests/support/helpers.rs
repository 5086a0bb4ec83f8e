// tests/support/helpers.rs
use super::builders::PORTLET_ID;
use super::mocks::{
    DummyClock, DummySlug, DummyTokenManager, InMemoryArticleStore, InMemoryPreferencesRepo,
    MockPermissionOracle,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use kb_display::application::display::DisplayTemplates;
use kb_display::application::ports::session::SessionMessageStore;
use kb_display::application::services::ApplicationServices;
use kb_display::infrastructure::security::session_store::InMemorySessionMessageStore;
use kb_display::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const PUBLIC_BASE_URL: &str = "http://portal.test";

/// Services wired over in-memory collaborators, with handles kept for seeding and inspection.
pub struct TestContext {
    pub articles: Arc<InMemoryArticleStore>,
    pub permissions: Arc<MockPermissionOracle>,
    pub preferences: Arc<InMemoryPreferencesRepo>,
    pub sessions: Arc<InMemorySessionMessageStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticleStore::new());
        let permissions = Arc::new(MockPermissionOracle::new());
        let preferences = Arc::new(InMemoryPreferencesRepo::new());
        let sessions = Arc::new(InMemorySessionMessageStore::new());

        let services = Arc::new(ApplicationServices::new(
            articles.clone(),
            articles.clone(),
            preferences.clone(),
            permissions.clone(),
            Arc::new(DummyTokenManager),
            sessions.clone() as Arc<dyn SessionMessageStore>,
            Arc::new(DummyClock),
            Arc::new(DummySlug),
            DisplayTemplates::default(),
        ));

        Self {
            articles,
            permissions,
            preferences,
            sessions,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState::new(Arc::clone(&self.services), PUBLIC_BASE_URL);
        build_router(state, &["*".to_string()])
    }
}

pub fn display_uri(query: &str) -> String {
    instance_display_uri(PORTLET_ID, query)
}

pub fn instance_display_uri(portlet_id: &str, query: &str) -> String {
    let base = format!("/api/v1/sites/20/kb-display/{portlet_id}");
    if query.is_empty() {
        base
    } else {
        format!("{base}?{query}")
    }
}

pub fn action_uri(action_name: &str) -> String {
    format!("/api/v1/sites/20/kb-display/{PORTLET_ID}/actions/{action_name}")
}

pub fn preferences_uri() -> String {
    format!("/api/v1/sites/20/kb-display/{PORTLET_ID}/preferences")
}

pub fn get(uri: &str, token: Option<&str>, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, format!("kb_session={session}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn send_json(
    method: &str,
    uri: &str,
    token: Option<&str>,
    session: Option<&str>,
    payload: Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, format!("kb_session={session}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

/// Session id issued through `Set-Cookie`, if any.
pub fn issued_session(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookie| cookie.split(';').next())
        .and_then(|pair| pair.strip_prefix("kb_session="))
        .map(str::to_string)
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("expected json body");
    (status, json)
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected body: {json}");
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}
