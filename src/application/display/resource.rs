use super::{
    service::{DisplayService, RenderRequest},
    templates::SELECT_CONFIGURATION_ARTICLE_PATH,
};
use crate::{
    application::{
        error::ApplicationResult, ports::permission::ArticleAction,
        queries::articles::GetArticleByUrlTitleQuery,
    },
    domain::article::ResourcePrimKey,
};

impl DisplayService {
    /// Resource key of the article this request addresses; `0` selects none.
    pub async fn resolve_resource_prim_key(
        &self,
        request: &RenderRequest,
    ) -> ApplicationResult<ResourcePrimKey> {
        let viewer = &request.viewer;
        let params = &request.params;

        if let Some(url_title) = params.url_title() {
            let article = self
                .article_queries
                .get_article_by_url_title(GetArticleByUrlTitleQuery {
                    group_id: viewer.scope_group_id(),
                    url_title: url_title.to_string(),
                })
                .await?;
            return Ok(ResourcePrimKey(article.resource_prim_key));
        }

        let default_value = request.preferences.resource_prim_key();
        let mvc_path = params.mvc_path();

        if (default_value == 0 && mvc_path == self.templates.view_template())
            || mvc_path == SELECT_CONFIGURATION_ARTICLE_PATH
        {
            return Ok(ResourcePrimKey::NONE);
        }

        let requested = params.resource_prim_key(default_value);
        if requested == 0 || requested != default_value {
            return Ok(ResourcePrimKey(requested));
        }

        // A configured default the viewer cannot see is hidden, not reported.
        let default_key = ResourcePrimKey(default_value);
        if !self
            .permissions
            .contains(viewer, default_key, ArticleAction::View)
            .await?
        {
            tracing::debug!(
                portlet_id = %request.portlet_id,
                resource = %default_key,
                "configured article not visible to viewer"
            );
            return Ok(ResourcePrimKey::NONE);
        }

        Ok(default_key)
    }
}
