use super::{
    errors::{ErrorContext, SessionErrorKey},
    service::{DisplayService, RenderRequest},
};
use crate::{
    application::{
        dto::KbArticleDto,
        error::ApplicationResult,
        queries::articles::{GetLatestArticleQuery, ListGroupArticlesQuery},
    },
    domain::article::{DEFAULT_PARENT_RESOURCE_PRIM_KEY, WorkflowStatus},
};

/// Values a render exposes to the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutcome {
    /// `None` when resolution failed before a status was chosen.
    pub status: Option<WorkflowStatus>,
    pub article: Option<KbArticleDto>,
}

impl DisplayService {
    /// Resolve the status and article for a render.
    ///
    /// Missing articles and permission failures are recorded in `errors` so
    /// that dispatch picks the error template; every other failure is returned.
    pub async fn render(
        &self,
        request: &RenderRequest,
        errors: &mut ErrorContext,
    ) -> ApplicationResult<RenderOutcome> {
        let mut outcome = RenderOutcome::default();

        match self.resolve_render(request, &mut outcome).await {
            Ok(()) => Ok(outcome),
            Err(err) => match err.session_error_key() {
                Some(key @ (SessionErrorKey::NoSuchArticle | SessionErrorKey::Principal)) => {
                    tracing::info!(
                        portlet_id = %request.portlet_id,
                        error = %err,
                        "render routed to error view"
                    );
                    errors.add(key);
                    errors.hide_default_error_message();
                    Ok(outcome)
                }
                _ => Err(err),
            },
        }
    }

    async fn resolve_render(
        &self,
        request: &RenderRequest,
        outcome: &mut RenderOutcome,
    ) -> ApplicationResult<()> {
        let status = self.resolve_status(request).await?;
        outcome.status = Some(status);

        let resource_prim_key = self.resolve_resource_prim_key(request).await?;
        let parent_resource_prim_key = request.params.parent_resource_prim_key();

        outcome.article = if resource_prim_key.is_selected() {
            let article = self
                .article_queries
                .get_latest_article(
                    &request.viewer,
                    GetLatestArticleQuery {
                        resource_prim_key,
                        status,
                    },
                )
                .await?;
            Some(article)
        } else if parent_resource_prim_key == DEFAULT_PARENT_RESOURCE_PRIM_KEY {
            self.article_queries
                .get_group_articles(ListGroupArticlesQuery {
                    group_id: request.viewer.scope_group_id(),
                    status,
                    offset: 0,
                    limit: 1,
                })
                .await?
                .into_iter()
                .next()
        } else {
            None
        };

        Ok(())
    }
}
