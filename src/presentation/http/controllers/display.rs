// src/presentation/http/controllers/display.rs
use crate::application::{
    display::{
        ErrorContext, MessageContext, RenderParams, RenderRequest, hide_default_error_message_key,
    },
    dto::{KbArticleDto, Viewer},
};
use crate::domain::article::GroupId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::params::NamespacedParams;
use crate::presentation::http::session::PortalSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// View model of one render of a display instance.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    /// Template the portal should render.
    pub view: String,
    pub status: Option<i32>,
    pub article: Option<KbArticleDto>,
    pub errors: Vec<String>,
    pub hide_default_error_message: bool,
    pub messages: Vec<String>,
}

pub(crate) fn group_id(raw: i64) -> HttpResult<GroupId> {
    GroupId::new(raw).map_err(|err| HttpError::from_error(err.into()))
}

pub async fn render(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    session: PortalSession,
    Path((raw_group_id, portlet_id)): Path<(i64, String)>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let viewer = Viewer::new(user, group_id(raw_group_id)?);
    let services = &state.services;
    let store = services.session_store();

    let preferences = services
        .display_preferences
        .load(&viewer, &portlet_id)
        .await
        .into_http()?;

    let params = NamespacedParams::new(&portlet_id, pairs);
    let request = RenderRequest {
        portlet_id: portlet_id.clone(),
        viewer,
        preferences,
        params: RenderParams::from_lookup(|name| params.get(name)),
    };

    let pending_errors = store
        .errors(session.id(), &portlet_id)
        .await
        .into_http()?;
    let pending_messages = store
        .messages(session.id(), &portlet_id)
        .await
        .into_http()?;
    let mut errors = ErrorContext::from_keys(pending_errors);
    let messages = MessageContext::from_keys(pending_messages);
    if messages.contains(&hide_default_error_message_key(&portlet_id)) {
        errors.hide_default_error_message();
    }

    let outcome = services
        .display
        .render(&request, &mut errors)
        .await
        .into_http()?;
    let target = services.display.dispatch(&request, &errors);

    if !session.is_new() {
        store.clear(session.id(), &portlet_id).await.into_http()?;
    }

    tracing::debug!(
        portlet_id = %portlet_id,
        view = target.path(),
        error_view = target.is_error(),
        "display rendered"
    );

    let body = RenderResponse {
        view: target.path().to_string(),
        status: outcome.status.map(|status| status.code()),
        article: outcome.article,
        errors: errors.keys().map(str::to_string).collect(),
        hide_default_error_message: errors.is_default_error_message_hidden(),
        messages: messages.keys().map(str::to_string).collect(),
    };

    let mut response = Json(body).into_response();
    session.attach(&mut response);
    Ok(response)
}
