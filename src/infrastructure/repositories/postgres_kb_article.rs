// src/infrastructure/repositories/postgres_kb_article.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleContent, ArticleTitle, GroupId, KbArticle, KbArticleReadRepository,
    KbArticleWriteRepository, NewKbArticle, ResourcePrimKey, UrlTitle, WorkflowStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "kb_article_id, resource_prim_key, group_id, parent_resource_prim_key, version, title, url_title, content, priority, status, user_id, created_at, modified_at";

/// Role names granted VIEW on every newly created article.
const DEFAULT_VIEW_ROLES: [&str; 2] = ["guest", "user"];

#[derive(Clone)]
pub struct PostgresKbArticleWriteRepository {
    pool: PgPool,
}

impl PostgresKbArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresKbArticleReadRepository {
    pool: PgPool,
}

impl PostgresKbArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct KbArticleRow {
    kb_article_id: i64,
    resource_prim_key: i64,
    group_id: i64,
    parent_resource_prim_key: i64,
    version: i32,
    title: String,
    url_title: String,
    content: String,
    priority: f64,
    status: i32,
    user_id: i64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl TryFrom<KbArticleRow> for KbArticle {
    type Error = DomainError;

    fn try_from(row: KbArticleRow) -> Result<Self, Self::Error> {
        Ok(KbArticle {
            kb_article_id: row.kb_article_id,
            resource_prim_key: ResourcePrimKey(row.resource_prim_key),
            group_id: GroupId::new(row.group_id)?,
            parent_resource_prim_key: row.parent_resource_prim_key,
            version: row.version,
            title: ArticleTitle::new(row.title)?,
            url_title: UrlTitle::new(row.url_title)?,
            content: ArticleContent::new(row.content)?,
            priority: row.priority,
            status: WorkflowStatus::try_from(row.status)?,
            user_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
            modified_at: row.modified_at,
        })
    }
}

#[async_trait]
impl KbArticleWriteRepository for PostgresKbArticleWriteRepository {
    async fn insert(&self, article: NewKbArticle) -> DomainResult<KbArticle> {
        let NewKbArticle {
            resource_prim_key,
            group_id,
            parent_resource_prim_key,
            version,
            title,
            url_title,
            content,
            priority,
            status,
            user_id,
            created_at,
            modified_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let (resource_prim_key, is_new_resource) = match resource_prim_key {
            Some(existing) => (i64::from(existing), false),
            None => {
                let allocated: i64 = sqlx::query_scalar("SELECT nextval('kb_resource_prim_key_seq')")
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
                (allocated, true)
            }
        };

        let sql = format!(
            "INSERT INTO kb_articles (resource_prim_key, group_id, parent_resource_prim_key, version, title, url_title, content, priority, status, user_id, created_at, modified_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, KbArticleRow>(&sql)
            .bind(resource_prim_key)
            .bind(i64::from(group_id))
            .bind(parent_resource_prim_key)
            .bind(version)
            .bind(title.as_str())
            .bind(url_title.as_str())
            .bind(content.as_str())
            .bind(priority)
            .bind(status.code())
            .bind(i64::from(user_id))
            .bind(created_at)
            .bind(modified_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if is_new_resource {
            for role in DEFAULT_VIEW_ROLES {
                sqlx::query(
                    "INSERT INTO kb_article_permissions (resource_prim_key, role_name, action)
                     VALUES ($1, $2, 'view')
                     ON CONFLICT DO NOTHING",
                )
                .bind(resource_prim_key)
                .bind(role)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            }
        }

        tx.commit().await.map_err(map_sqlx)?;

        KbArticle::try_from(row)
    }

    async fn delete(&self, resource: ResourcePrimKey) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM kb_articles WHERE resource_prim_key = $1")
            .bind(i64::from(resource))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        sqlx::query("DELETE FROM kb_article_permissions WHERE resource_prim_key = $1")
            .bind(i64::from(resource))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

impl PostgresKbArticleReadRepository {
    fn push_status_filter(builder: &mut QueryBuilder<'_, Postgres>, status: WorkflowStatus) {
        if !status.is_any() {
            builder.push(" AND status = ");
            builder.push_bind(status.code());
        }
    }
}

#[async_trait]
impl KbArticleReadRepository for PostgresKbArticleReadRepository {
    async fn find_latest(
        &self,
        resource: ResourcePrimKey,
        status: WorkflowStatus,
    ) -> DomainResult<Option<KbArticle>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM kb_articles WHERE resource_prim_key = "));
        builder.push_bind(i64::from(resource));
        Self::push_status_filter(&mut builder, status);
        builder.push(" ORDER BY version DESC LIMIT 1");

        let row = builder
            .build_query_as::<KbArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(KbArticle::try_from).transpose()
    }

    async fn list_group_articles(
        &self,
        group_id: GroupId,
        status: WorkflowStatus,
        offset: u32,
        limit: u32,
    ) -> DomainResult<Vec<KbArticle>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM (SELECT DISTINCT ON (resource_prim_key) {ARTICLE_COLUMNS} FROM kb_articles WHERE group_id = "
        ));
        builder.push_bind(i64::from(group_id));
        Self::push_status_filter(&mut builder, status);
        builder.push(" ORDER BY resource_prim_key, version DESC) latest");
        builder.push(" ORDER BY priority ASC, resource_prim_key ASC");

        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<KbArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(KbArticle::try_from).collect()
    }

    async fn find_by_url_title(
        &self,
        group_id: GroupId,
        url_title: &UrlTitle,
    ) -> DomainResult<Option<KbArticle>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM kb_articles
             WHERE group_id = $1 AND url_title = $2
             ORDER BY (status = 0) DESC, version DESC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, KbArticleRow>(&sql)
            .bind(i64::from(group_id))
            .bind(url_title.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(KbArticle::try_from).transpose()
    }
}
