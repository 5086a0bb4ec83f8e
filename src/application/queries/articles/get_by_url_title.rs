use super::KbArticleQueryService;
use crate::{
    application::{
        dto::KbArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{GroupId, UrlTitle},
};

pub struct GetArticleByUrlTitleQuery {
    pub group_id: GroupId,
    pub url_title: String,
}

impl KbArticleQueryService {
    pub async fn get_article_by_url_title(
        &self,
        query: GetArticleByUrlTitleQuery,
    ) -> ApplicationResult<KbArticleDto> {
        // A value that can never be stored cannot match an article either.
        let url_title = UrlTitle::new(query.url_title.clone()).map_err(|_| {
            ApplicationError::article_not_found(format!(
                "no article with url title '{}' in group {}",
                query.url_title, query.group_id
            ))
        })?;
        let article = self
            .read_repo
            .find_by_url_title(query.group_id, &url_title)
            .await?
            .ok_or_else(|| {
                ApplicationError::article_not_found(format!(
                    "no article with url title '{url_title}' in group {}",
                    query.group_id
                ))
            })?;

        Ok(article.into())
    }
}
