use super::service::{DisplayService, RenderRequest};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::permission::ArticleAction,
    },
    domain::article::WorkflowStatus,
};

impl DisplayService {
    /// Workflow status the viewer gets to see for this request.
    ///
    /// Anonymous viewers only ever see approved content. Signed-in viewers may
    /// pick another status only when they can update the resolved article.
    /// A code naming no status matches no version, so it fails as a missing
    /// article.
    pub async fn resolve_status(&self, request: &RenderRequest) -> ApplicationResult<WorkflowStatus> {
        let viewer = &request.viewer;
        if !viewer.is_signed_in() {
            return Ok(WorkflowStatus::Approved);
        }

        let requested = request.params.status_code();
        if requested == Some(WorkflowStatus::Approved.code()) {
            return Ok(WorkflowStatus::Approved);
        }

        let resource = self.resolve_resource_prim_key(request).await?;
        if resource.0 == 0 {
            return Ok(WorkflowStatus::Approved);
        }

        if self
            .permissions
            .contains(viewer, resource, ArticleAction::Update)
            .await?
        {
            return match requested {
                None => Ok(WorkflowStatus::Any),
                Some(code) => WorkflowStatus::from_code(code).ok_or_else(|| {
                    ApplicationError::article_not_found(format!(
                        "no version of article {resource} has status {code}"
                    ))
                }),
            };
        }

        tracing::debug!(
            %resource,
            requested = ?requested,
            "status override requires update permission, showing approved"
        );
        Ok(WorkflowStatus::Approved)
    }
}
