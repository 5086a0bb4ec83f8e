use super::map_sqlx;
use crate::application::{
    ApplicationResult,
    dto::Viewer,
    ports::permission::{ArticleAction, PermissionOracle},
};
use crate::domain::article::ResourcePrimKey;
use async_trait::async_trait;
use sqlx::PgPool;

/// Permission oracle over `kb_article_permissions`.
///
/// A `kb_articles:<action>:any` capability grants the action on every article.
/// Otherwise the viewer needs a role grant for the resource, or must have
/// authored one of its versions. Unknown resources are never granted.
#[derive(Clone)]
pub struct PostgresPermissionOracle {
    pool: PgPool,
}

impl PostgresPermissionOracle {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionOracle for PostgresPermissionOracle {
    async fn contains(
        &self,
        viewer: &Viewer,
        resource: ResourcePrimKey,
        action: ArticleAction,
    ) -> ApplicationResult<bool> {
        if !resource.is_selected() {
            return Ok(false);
        }

        let any_action = format!("{}:any", action.as_str());
        let any_grant = viewer.has_capability("kb_articles", &any_action);
        let owner_id = viewer.user_id().map(i64::from).unwrap_or(0);

        let granted: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM kb_articles WHERE resource_prim_key = $1)
                AND (
                    $5
                    OR EXISTS (
                        SELECT 1 FROM kb_article_permissions
                        WHERE resource_prim_key = $1 AND action = $2 AND role_name = ANY($3)
                    )
                    OR EXISTS (
                        SELECT 1 FROM kb_articles
                        WHERE resource_prim_key = $1 AND user_id = $4
                    )
                )",
        )
        .bind(i64::from(resource))
        .bind(action.as_str())
        .bind(viewer.role_names())
        .bind(owner_id)
        .bind(any_grant)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(
            resource_prim_key = %resource,
            action = %action,
            granted,
            "article permission checked"
        );
        Ok(granted)
    }
}
