use super::{
    KbArticleCommandService,
    capability::{ensure_permission, require_signed_in},
};
use crate::{
    application::{
        dto::{KbArticleDto, Viewer},
        error::{ApplicationError, ApplicationResult},
        ports::permission::ArticleAction,
    },
    domain::article::{
        ArticleContent, ArticleTitle, ResourcePrimKey, UrlTitle, WorkflowAction, WorkflowStatus,
    },
};

pub struct UpdateArticleCommand {
    pub resource_prim_key: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub url_title: Option<String>,
    pub priority: Option<f64>,
    pub workflow_action: WorkflowAction,
}

impl KbArticleCommandService {
    /// Store a new version of an article. Omitted fields carry over from the latest version.
    pub async fn update_article(
        &self,
        viewer: &Viewer,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<KbArticleDto> {
        let actor = require_signed_in(viewer)?;
        let resource = ResourcePrimKey(command.resource_prim_key);

        let latest = self
            .read_repo
            .find_latest(resource, WorkflowStatus::Any)
            .await?
            .ok_or_else(|| {
                ApplicationError::article_not_found(format!(
                    "no article with resource key {resource}"
                ))
            })?;

        ensure_permission(
            self.permissions.as_ref(),
            viewer,
            resource,
            ArticleAction::Update,
        )
        .await?;

        let title = match command.title {
            Some(title) => ArticleTitle::new(title)?,
            None => latest.title.clone(),
        };
        let content = match command.content {
            Some(content) => ArticleContent::new(content)?,
            None => latest.content.clone(),
        };
        let url_title = match command.url_title {
            Some(url_title) => UrlTitle::new(url_title)?,
            None => latest.url_title.clone(),
        };
        let priority = command.priority.unwrap_or(latest.priority);

        let next = latest.next_version(
            title,
            url_title,
            content,
            priority,
            command.workflow_action.resulting_status(),
            actor.id,
            self.clock.now(),
        );

        let stored = self.write_repo.insert(next).await?;
        tracing::info!(
            resource_prim_key = %stored.resource_prim_key,
            version = stored.version,
            status = %stored.status,
            "knowledge-base article updated"
        );
        Ok(stored.into())
    }
}
