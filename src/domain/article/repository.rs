use crate::domain::article::entity::{KbArticle, NewKbArticle};
use crate::domain::article::status::WorkflowStatus;
use crate::domain::article::value_objects::{GroupId, ResourcePrimKey, UrlTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait KbArticleReadRepository: Send + Sync {
    /// Highest version of `resource` at `status`; `WorkflowStatus::Any` ignores the status.
    async fn find_latest(
        &self,
        resource: ResourcePrimKey,
        status: WorkflowStatus,
    ) -> DomainResult<Option<KbArticle>>;

    /// Latest version of each article of the group at `status`, lowest
    /// priority value first with ties broken by resource key.
    async fn list_group_articles(
        &self,
        group_id: GroupId,
        status: WorkflowStatus,
        offset: u32,
        limit: u32,
    ) -> DomainResult<Vec<KbArticle>>;

    /// Article addressed by its url title, preferring an approved version.
    async fn find_by_url_title(
        &self,
        group_id: GroupId,
        url_title: &UrlTitle,
    ) -> DomainResult<Option<KbArticle>>;
}

#[async_trait]
pub trait KbArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewKbArticle) -> DomainResult<KbArticle>;
    /// Remove every version of the article.
    async fn delete(&self, resource: ResourcePrimKey) -> DomainResult<()>;
}
