// tests/support/mocks/article_store.rs
use async_trait::async_trait;
use kb_display::domain::article::{
    GroupId, KbArticle, KbArticleReadRepository, KbArticleWriteRepository,
    NewKbArticle, ResourcePrimKey, UrlTitle, WorkflowStatus,
};
use kb_display::domain::errors::{DomainError, DomainResult};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Mutex;

const FIRST_ALLOCATED_RESOURCE: i64 = 1000;

#[derive(Default)]
struct StoreState {
    rows: Vec<KbArticle>,
    next_article_id: i64,
    next_resource: i64,
}

/// Versioned article rows kept in memory; serves both repository ports.
pub struct InMemoryArticleStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self {
            state: Mutex::new(StoreState {
                rows: Vec::new(),
                next_article_id: 1,
                next_resource: FIRST_ALLOCATED_RESOURCE,
            }),
        }
    }
}

fn matches_status(article: &KbArticle, status: WorkflowStatus) -> bool {
    status.is_any() || article.status == status
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a prepared row as-is.
    pub fn seed(&self, article: KbArticle) {
        let mut state = self.state.lock().unwrap();
        state.next_article_id = state.next_article_id.max(article.kb_article_id + 1);
        state.rows.push(article);
    }

    pub fn versions_of(&self, resource: i64) -> Vec<KbArticle> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<KbArticle> = state
            .rows
            .iter()
            .filter(|row| row.resource_prim_key.0 == resource)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.version);
        rows
    }
}

#[async_trait]
impl KbArticleReadRepository for InMemoryArticleStore {
    async fn find_latest(
        &self,
        resource: ResourcePrimKey,
        status: WorkflowStatus,
    ) -> DomainResult<Option<KbArticle>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|row| row.resource_prim_key == resource && matches_status(row, status))
            .max_by_key(|row| row.version)
            .cloned())
    }

    async fn list_group_articles(
        &self,
        group_id: GroupId,
        status: WorkflowStatus,
        offset: u32,
        limit: u32,
    ) -> DomainResult<Vec<KbArticle>> {
        let state = self.state.lock().unwrap();
        let mut latest: BTreeMap<i64, KbArticle> = BTreeMap::new();
        for row in state
            .rows
            .iter()
            .filter(|row| row.group_id == group_id && matches_status(row, status))
        {
            let keep = latest
                .get(&row.resource_prim_key.0)
                .map(|current| current.version < row.version)
                .unwrap_or(true);
            if keep {
                latest.insert(row.resource_prim_key.0, row.clone());
            }
        }

        let mut rows: Vec<KbArticle> = latest.into_values().collect();
        rows.sort_by(|a, b| {
            a.priority
                .partial_cmp(&b.priority)
                .unwrap_or(Ordering::Equal)
                .then(a.resource_prim_key.cmp(&b.resource_prim_key))
        });

        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_url_title(
        &self,
        group_id: GroupId,
        url_title: &UrlTitle,
    ) -> DomainResult<Option<KbArticle>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|row| row.group_id == group_id && row.url_title == *url_title)
            .max_by_key(|row| (row.is_approved(), row.version))
            .cloned())
    }
}

#[async_trait]
impl KbArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewKbArticle) -> DomainResult<KbArticle> {
        let mut state = self.state.lock().unwrap();
        let resource_prim_key = match article.resource_prim_key {
            Some(existing) => existing,
            None => {
                let allocated = ResourcePrimKey(state.next_resource);
                state.next_resource += 1;
                allocated
            }
        };

        if state
            .rows
            .iter()
            .any(|row| row.resource_prim_key == resource_prim_key && row.version == article.version)
        {
            return Err(DomainError::Conflict("article version already exists".into()));
        }

        let stored = KbArticle {
            kb_article_id: state.next_article_id,
            resource_prim_key,
            group_id: article.group_id,
            parent_resource_prim_key: article.parent_resource_prim_key,
            version: article.version,
            title: article.title,
            url_title: article.url_title,
            content: article.content,
            priority: article.priority,
            status: article.status,
            user_id: article.user_id,
            created_at: article.created_at,
            modified_at: article.modified_at,
        };
        state.next_article_id += 1;
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, resource: ResourcePrimKey) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|row| row.resource_prim_key != resource);
        if state.rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
