use crate::domain::article::KbArticle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbArticleDto {
    pub kb_article_id: i64,
    pub resource_prim_key: i64,
    pub group_id: i64,
    pub parent_resource_prim_key: i64,
    pub version: i32,
    pub title: String,
    pub url_title: String,
    pub content: String,
    pub priority: f64,
    pub status: i32,
    pub user_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub modified_at: DateTime<Utc>,
}

impl From<KbArticle> for KbArticleDto {
    fn from(article: KbArticle) -> Self {
        Self {
            kb_article_id: article.kb_article_id,
            resource_prim_key: article.resource_prim_key.into(),
            group_id: article.group_id.into(),
            parent_resource_prim_key: article.parent_resource_prim_key,
            version: article.version,
            title: article.title.into_inner(),
            url_title: article.url_title.into_inner(),
            content: article.content.into_inner(),
            priority: article.priority,
            status: article.status.code(),
            user_id: article.user_id.into(),
            created_at: article.created_at,
            modified_at: article.modified_at,
        }
    }
}
