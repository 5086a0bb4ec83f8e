// src/presentation/http/controllers/preferences.rs
use super::display::group_id;
use crate::application::dto::Viewer;
use crate::domain::{article::ResourcePrimKey, portlet::PortletPreferences};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub portlet_id: String,
    pub resource_prim_key: i64,
    pub values: BTreeMap<String, String>,
}

impl PreferencesResponse {
    fn new(portlet_id: String, preferences: &PortletPreferences) -> Self {
        Self {
            portlet_id,
            resource_prim_key: preferences.resource_prim_key(),
            values: preferences
                .values()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub resource_prim_key: i64,
}

pub async fn get_preferences(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    Path((raw_group_id, portlet_id)): Path<(i64, String)>,
) -> HttpResult<Json<PreferencesResponse>> {
    let viewer = Viewer::new(user, group_id(raw_group_id)?);
    let preferences = state
        .services
        .display_preferences
        .load(&viewer, &portlet_id)
        .await
        .into_http()?;

    Ok(Json(PreferencesResponse::new(portlet_id, &preferences)))
}

pub async fn update_preferences(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((raw_group_id, portlet_id)): Path<(i64, String)>,
    Json(payload): Json<UpdatePreferencesRequest>,
) -> HttpResult<Json<PreferencesResponse>> {
    let viewer = Viewer::signed_in(user, group_id(raw_group_id)?);
    let preferences = state
        .services
        .display_preferences
        .set_default_article(
            &viewer,
            &portlet_id,
            ResourcePrimKey(payload.resource_prim_key),
        )
        .await
        .into_http()?;

    Ok(Json(PreferencesResponse::new(portlet_id, &preferences)))
}
