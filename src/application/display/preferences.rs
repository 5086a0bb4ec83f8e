use std::sync::Arc;

use crate::{
    application::{
        dto::Viewer,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ResourcePrimKey,
        portlet::{PREF_RESOURCE_PRIM_KEY, PortletPreferences, PortletPreferencesRepository},
    },
};

/// Reads and updates the configuration of display instances.
pub struct DisplayPreferencesService {
    repo: Arc<dyn PortletPreferencesRepository>,
}

impl DisplayPreferencesService {
    pub fn new(repo: Arc<dyn PortletPreferencesRepository>) -> Self {
        Self { repo }
    }

    pub async fn load(&self, viewer: &Viewer, portlet_id: &str) -> ApplicationResult<PortletPreferences> {
        Ok(self.repo.find(viewer.scope_group_id(), portlet_id).await?)
    }

    /// Point the display instance at a default article. `0` clears the selection.
    pub async fn set_default_article(
        &self,
        viewer: &Viewer,
        portlet_id: &str,
        resource_prim_key: ResourcePrimKey,
    ) -> ApplicationResult<PortletPreferences> {
        let user = viewer
            .user()
            .ok_or_else(|| ApplicationError::unauthorized("sign in to configure the display"))?;
        if !user.has_capability("kb_display", "configure") {
            return Err(ApplicationError::forbidden(
                "missing capability kb_display:configure",
            ));
        }
        if resource_prim_key.0 < 0 {
            return Err(ApplicationError::validation(
                "resource_prim_key must not be negative",
            ));
        }

        let group_id = viewer.scope_group_id();
        let mut preferences = self.repo.find(group_id, portlet_id).await?;
        preferences.set_value(PREF_RESOURCE_PRIM_KEY, resource_prim_key.to_string());
        self.repo.store(group_id, portlet_id, &preferences).await?;

        tracing::info!(
            group_id = %group_id,
            portlet_id,
            resource_prim_key = %resource_prim_key,
            "display default article configured"
        );
        Ok(preferences)
    }
}
