use super::KbArticleQueryService;
use crate::{
    application::{dto::KbArticleDto, error::ApplicationResult},
    domain::article::{GroupId, WorkflowStatus},
};

pub struct ListGroupArticlesQuery {
    pub group_id: GroupId,
    pub status: WorkflowStatus,
    pub offset: u32,
    pub limit: u32,
}

impl KbArticleQueryService {
    /// Group listing used by the display fallback; it performs no permission check.
    pub async fn get_group_articles(
        &self,
        query: ListGroupArticlesQuery,
    ) -> ApplicationResult<Vec<KbArticleDto>> {
        const MAX_LIMIT: u32 = 100;

        let limit = query.limit.min(MAX_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let records = self
            .read_repo
            .list_group_articles(query.group_id, query.status, query.offset, limit)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
