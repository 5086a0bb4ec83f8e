// tests/support/mocks/preferences.rs
use async_trait::async_trait;
use kb_display::domain::article::GroupId;
use kb_display::domain::errors::DomainResult;
use kb_display::domain::portlet::{PortletPreferences, PortletPreferencesRepository};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryPreferencesRepo {
    entries: Mutex<HashMap<(i64, String), PortletPreferences>>,
}

impl InMemoryPreferencesRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, group_id: i64, portlet_id: &str, preferences: PortletPreferences) {
        self.entries
            .lock()
            .unwrap()
            .insert((group_id, portlet_id.to_string()), preferences);
    }
}

#[async_trait]
impl PortletPreferencesRepository for InMemoryPreferencesRepo {
    async fn find(&self, group_id: GroupId, portlet_id: &str) -> DomainResult<PortletPreferences> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(group_id.0, portlet_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn store(
        &self,
        group_id: GroupId,
        portlet_id: &str,
        preferences: &PortletPreferences,
    ) -> DomainResult<()> {
        self.set(group_id.0, portlet_id, preferences.clone());
        Ok(())
    }
}
