// tests/support/mocks/permission.rs
use async_trait::async_trait;
use kb_display::application::{
    ApplicationResult,
    dto::Viewer,
    error::ApplicationError,
    ports::permission::{ArticleAction, PermissionOracle},
};
use kb_display::domain::article::ResourcePrimKey;
use std::collections::HashSet;
use std::sync::Mutex;

/// Grants keyed by (user id, resource, action); user id `0` stands for anonymous viewers.
#[derive(Default)]
pub struct MockPermissionOracle {
    grants: Mutex<HashSet<(i64, i64, ArticleAction)>>,
    calls: Mutex<Vec<(i64, ArticleAction)>>,
    failure: Mutex<Option<String>>,
}

impl MockPermissionOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, user_id: Option<i64>, resource: i64, action: ArticleAction) {
        self.grants
            .lock()
            .unwrap()
            .insert((user_id.unwrap_or(0), resource, action));
    }

    /// Make every subsequent check fail with an infrastructure error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Checks performed so far, as (resource, action).
    pub fn calls(&self) -> Vec<(i64, ArticleAction)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PermissionOracle for MockPermissionOracle {
    async fn contains(
        &self,
        viewer: &Viewer,
        resource: ResourcePrimKey,
        action: ArticleAction,
    ) -> ApplicationResult<bool> {
        self.calls.lock().unwrap().push((resource.0, action));
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ApplicationError::infrastructure(message));
        }

        let user_id = viewer.user_id().map(i64::from).unwrap_or(0);
        Ok(self
            .grants
            .lock()
            .unwrap()
            .contains(&(user_id, resource.0, action)))
    }
}
