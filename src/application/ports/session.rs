use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Error and message keys that survive from an action to the next render.
///
/// Entries belong to one display instance within a session: a render of
/// `portlet_id` only sees and clears what was recorded for that instance.
#[async_trait]
pub trait SessionMessageStore: Send + Sync {
    async fn add_error(&self, session_id: &str, portlet_id: &str, key: &str)
    -> ApplicationResult<()>;

    /// Error keys currently pending for the instance.
    async fn errors(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<Vec<String>>;

    /// Record a message key (success banners, banner suppression flags).
    async fn add_message(
        &self,
        session_id: &str,
        portlet_id: &str,
        key: &str,
    ) -> ApplicationResult<()>;

    async fn messages(&self, session_id: &str, portlet_id: &str)
    -> ApplicationResult<Vec<String>>;

    /// Drop everything pending for the instance once it has been rendered.
    async fn clear(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<()>;
}
