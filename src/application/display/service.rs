use std::sync::Arc;

use super::{params::RenderParams, templates::DisplayTemplates};
use crate::{
    application::{
        commands::articles::KbArticleCommandService, dto::Viewer,
        ports::permission::PermissionOracle, queries::articles::KbArticleQueryService,
    },
    domain::portlet::PortletPreferences,
};

/// Everything a render decision depends on, detached from the transport.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub portlet_id: String,
    pub viewer: Viewer,
    pub preferences: PortletPreferences,
    pub params: RenderParams,
}

pub struct DisplayService {
    pub(super) article_queries: Arc<KbArticleQueryService>,
    pub(super) article_commands: Arc<KbArticleCommandService>,
    pub(super) permissions: Arc<dyn PermissionOracle>,
    pub(super) templates: DisplayTemplates,
}

impl DisplayService {
    pub fn new(
        article_queries: Arc<KbArticleQueryService>,
        article_commands: Arc<KbArticleCommandService>,
        permissions: Arc<dyn PermissionOracle>,
        templates: DisplayTemplates,
    ) -> Self {
        Self {
            article_queries,
            article_commands,
            permissions,
            templates,
        }
    }
}
