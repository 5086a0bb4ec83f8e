use crate::application::{
    dto::{AuthenticatedUser, Viewer},
    error::{ApplicationError, ApplicationResult},
    ports::permission::{ArticleAction, PermissionOracle},
};
use crate::domain::article::ResourcePrimKey;

pub(super) fn require_signed_in(viewer: &Viewer) -> ApplicationResult<&AuthenticatedUser> {
    viewer
        .user()
        .ok_or_else(|| ApplicationError::unauthorized("sign in required"))
}

pub(super) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

pub(super) async fn ensure_permission(
    permissions: &dyn PermissionOracle,
    viewer: &Viewer,
    resource: ResourcePrimKey,
    action: ArticleAction,
) -> ApplicationResult<()> {
    if permissions.contains(viewer, resource, action).await? {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing {action} permission on article {resource}"
        )))
    }
}
