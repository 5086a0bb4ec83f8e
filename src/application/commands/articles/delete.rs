// src/application/commands/articles/delete.rs
use super::{
    KbArticleCommandService,
    capability::{ensure_permission, require_signed_in},
};
use crate::{
    application::{
        dto::Viewer,
        error::{ApplicationError, ApplicationResult},
        ports::permission::ArticleAction,
    },
    domain::article::{ResourcePrimKey, WorkflowStatus},
};

pub struct DeleteArticleCommand {
    pub resource_prim_key: i64,
}

impl KbArticleCommandService {
    pub async fn delete_article(
        &self,
        viewer: &Viewer,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        require_signed_in(viewer)?;
        let resource = ResourcePrimKey(command.resource_prim_key);

        self.read_repo
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
            ArticleAction::Delete,
        )
        .await?;

        self.write_repo.delete(resource).await?;
        tracing::info!(resource_prim_key = %resource, "knowledge-base article deleted");
        Ok(())
    }
}
