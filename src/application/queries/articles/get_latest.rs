use super::KbArticleQueryService;
use crate::{
    application::{
        dto::{KbArticleDto, Viewer},
        error::{ApplicationError, ApplicationResult},
        ports::permission::ArticleAction,
    },
    domain::article::{ResourcePrimKey, WorkflowStatus},
};

pub struct GetLatestArticleQuery {
    pub resource_prim_key: ResourcePrimKey,
    pub status: WorkflowStatus,
}

impl KbArticleQueryService {
    pub async fn get_latest_article(
        &self,
        viewer: &Viewer,
        query: GetLatestArticleQuery,
    ) -> ApplicationResult<KbArticleDto> {
        let GetLatestArticleQuery {
            resource_prim_key,
            status,
        } = query;

        // The resource must exist at all before its permissions mean anything.
        self.read_repo
            .find_latest(resource_prim_key, WorkflowStatus::Any)
            .await?
            .ok_or_else(|| {
                ApplicationError::article_not_found(format!(
                    "no article with resource key {resource_prim_key}"
                ))
            })?;

        if !self
            .permissions
            .contains(viewer, resource_prim_key, ArticleAction::View)
            .await?
        {
            tracing::debug!(%resource_prim_key, "viewer lacks view permission");
            return Err(ApplicationError::forbidden(format!(
                "missing view permission on article {resource_prim_key}"
            )));
        }

        let article = self
            .read_repo
            .find_latest(resource_prim_key, status)
            .await?
            .ok_or_else(|| {
                ApplicationError::article_not_found(format!(
                    "no {status} version of article {resource_prim_key}"
                ))
            })?;

        Ok(article.into())
    }
}
