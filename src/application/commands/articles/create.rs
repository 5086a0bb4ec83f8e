// src/application/commands/articles/create.rs
use super::{
    KbArticleCommandService,
    capability::{ensure_capability, require_signed_in},
};
use crate::{
    application::{
        dto::{KbArticleDto, Viewer},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleContent, ArticleTitle, DEFAULT_PARENT_RESOURCE_PRIM_KEY, NewKbArticle, UrlTitle,
        WorkflowAction,
    },
};

const DEFAULT_PRIORITY: f64 = 1.0;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub url_title: Option<String>,
    pub parent_resource_prim_key: i64,
    pub priority: Option<f64>,
    pub workflow_action: WorkflowAction,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    url_title: Option<String>,
    parent_resource_prim_key: Option<i64>,
    priority: Option<f64>,
    workflow_action: WorkflowAction,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn url_title(mut self, url_title: impl Into<String>) -> Self {
        self.url_title = Some(url_title.into());
        self
    }

    pub fn parent_resource_prim_key(mut self, parent: i64) -> Self {
        self.parent_resource_prim_key = Some(parent);
        self
    }

    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn workflow_action(mut self, action: WorkflowAction) -> Self {
        self.workflow_action = action;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            url_title: self.url_title,
            parent_resource_prim_key: self
                .parent_resource_prim_key
                .unwrap_or(DEFAULT_PARENT_RESOURCE_PRIM_KEY),
            priority: self.priority,
            workflow_action: self.workflow_action,
        })
    }
}

impl KbArticleCommandService {
    pub async fn create_article(
        &self,
        viewer: &Viewer,
        command: CreateArticleCommand,
    ) -> ApplicationResult<KbArticleDto> {
        let actor = require_signed_in(viewer)?;
        ensure_capability(actor, "kb_articles", "add")?;

        let group_id = viewer.scope_group_id();
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let url_title = match command.url_title {
            Some(explicit) => UrlTitle::new(explicit)?,
            None => {
                self.url_titles
                    .generate_unique_url_title(group_id, &title, None)
                    .await?
            }
        };
        let now = self.clock.now();

        let new_article = NewKbArticle {
            resource_prim_key: None,
            group_id,
            parent_resource_prim_key: command.parent_resource_prim_key,
            version: 1,
            title,
            url_title,
            content,
            priority: command.priority.unwrap_or(DEFAULT_PRIORITY),
            status: command.workflow_action.resulting_status(),
            user_id: actor.id,
            created_at: now,
            modified_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            resource_prim_key = %created.resource_prim_key,
            group_id = %group_id,
            status = %created.status,
            "knowledge-base article created"
        );
        Ok(created.into())
    }
}
