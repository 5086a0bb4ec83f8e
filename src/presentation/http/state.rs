// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Externally visible base URL, without a trailing slash.
    pub public_base_url: Arc<str>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, public_base_url: &str) -> Self {
        Self {
            services,
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }

    /// URL of the page hosting a display instance; render requests land here.
    pub fn layout_url(&self, group_id: i64, portlet_id: &str) -> String {
        format!(
            "{}/api/v1/sites/{group_id}/kb-display/{portlet_id}",
            self.public_base_url
        )
    }
}
