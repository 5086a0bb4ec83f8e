use crate::application::{ApplicationResult, dto::Viewer};
use crate::domain::article::ResourcePrimKey;
use async_trait::async_trait;
use std::fmt;

/// Operations a viewer may be allowed to perform on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleAction {
    View,
    Update,
    Delete,
}

impl ArticleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleAction::View => "view",
            ArticleAction::Update => "update",
            ArticleAction::Delete => "delete",
        }
    }
}

impl fmt::Display for ArticleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait PermissionOracle: Send + Sync {
    /// Whether `viewer` may perform `action` on `resource`. Unknown resources answer `false`.
    async fn contains(
        &self,
        viewer: &Viewer,
        resource: ResourcePrimKey,
        action: ArticleAction,
    ) -> ApplicationResult<bool>;
}
