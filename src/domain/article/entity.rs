// src/domain/article/entity.rs
use crate::domain::article::status::WorkflowStatus;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleTitle, GroupId, ResourcePrimKey, UrlTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// One stored version of a knowledge-base article.
#[derive(Debug, Clone)]
pub struct KbArticle {
    pub kb_article_id: i64,
    pub resource_prim_key: ResourcePrimKey,
    pub group_id: GroupId,
    pub parent_resource_prim_key: i64,
    pub version: i32,
    pub title: ArticleTitle,
    pub url_title: UrlTitle,
    pub content: ArticleContent,
    /// Lower values rank first.
    pub priority: f64,
    pub status: WorkflowStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl KbArticle {
    pub fn is_approved(&self) -> bool {
        self.status == WorkflowStatus::Approved
    }

    /// Build the next version of this article carrying new content.
    #[allow(clippy::too_many_arguments)]
    pub fn next_version(
        &self,
        title: ArticleTitle,
        url_title: UrlTitle,
        content: ArticleContent,
        priority: f64,
        status: WorkflowStatus,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> NewKbArticle {
        NewKbArticle {
            resource_prim_key: Some(self.resource_prim_key),
            group_id: self.group_id,
            parent_resource_prim_key: self.parent_resource_prim_key,
            version: self.version + 1,
            title,
            url_title,
            content,
            priority,
            status,
            user_id,
            created_at: self.created_at,
            modified_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewKbArticle {
    /// `None` allocates a fresh resource key.
    pub resource_prim_key: Option<ResourcePrimKey>,
    pub group_id: GroupId,
    pub parent_resource_prim_key: i64,
    pub version: i32,
    pub title: ArticleTitle,
    pub url_title: UrlTitle,
    pub content: ArticleContent,
    pub priority: f64,
    pub status: WorkflowStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
