// src/presentation/http/controllers/actions.rs
use super::display::group_id;
use crate::application::{
    display::{ActionForm, ActionRequest, hide_default_error_message_key},
    dto::{KbArticleDto, Viewer},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::session::PortalSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub redirect: String,
    pub errors: Vec<String>,
    pub messages: Vec<String>,
    pub article: Option<KbArticleDto>,
}

/// Action phase of a display instance. Errors and banners are kept in the
/// session for the render that follows the redirect.
pub async fn process_action(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    session: PortalSession,
    Path((raw_group_id, portlet_id, action_name)): Path<(i64, String, String)>,
    Json(form): Json<ActionForm>,
) -> HttpResult<Response> {
    let viewer = Viewer::new(user, group_id(raw_group_id)?);
    let request = ActionRequest {
        layout_url: state.layout_url(raw_group_id, &portlet_id),
        portlet_id,
        viewer,
        action_name,
        form,
    };

    let outcome = state
        .services
        .display
        .process_action(&request)
        .await
        .into_http()?;

    let store = state.services.session_store();
    let portlet_id = request.portlet_id.as_str();
    for key in outcome.errors.keys() {
        store
            .add_error(session.id(), portlet_id, key)
            .await
            .into_http()?;
    }
    if !outcome.errors.is_empty() {
        store
            .add_message(
                session.id(),
                portlet_id,
                &hide_default_error_message_key(portlet_id),
            )
            .await
            .into_http()?;
    }
    for key in outcome.messages.keys() {
        store
            .add_message(session.id(), portlet_id, key)
            .await
            .into_http()?;
    }

    tracing::info!(
        portlet_id = %request.portlet_id,
        action = %request.action_name,
        failed = !outcome.errors.is_empty(),
        "display action processed"
    );

    let body = ActionResponse {
        redirect: outcome.redirect,
        errors: outcome.errors.keys().map(str::to_string).collect(),
        messages: outcome.messages.keys().map(str::to_string).collect(),
        article: outcome.article,
    };

    let mut response = Json(body).into_response();
    session.attach(&mut response);
    Ok(response)
}
