// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::KbArticleCommandService,
        display::{DisplayPreferencesService, DisplayService, DisplayTemplates},
        ports::{
            permission::PermissionOracle, security::TokenManager, session::SessionMessageStore,
            time::Clock, util::SlugGenerator,
        },
        queries::articles::KbArticleQueryService,
    },
    domain::{
        article::{KbArticleReadRepository, KbArticleWriteRepository, services::UrlTitleService},
        portlet::PortletPreferencesRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<KbArticleCommandService>,
    pub article_queries: Arc<KbArticleQueryService>,
    pub display: Arc<DisplayService>,
    pub display_preferences: Arc<DisplayPreferencesService>,
    token_manager: Arc<dyn TokenManager>,
    session_store: Arc<dyn SessionMessageStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn KbArticleWriteRepository>,
        article_read_repo: Arc<dyn KbArticleReadRepository>,
        preferences_repo: Arc<dyn PortletPreferencesRepository>,
        permissions: Arc<dyn PermissionOracle>,
        token_manager: Arc<dyn TokenManager>,
        session_store: Arc<dyn SessionMessageStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        templates: DisplayTemplates,
    ) -> Self {
        let url_titles = Arc::new(UrlTitleService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(KbArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&permissions),
            url_titles,
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(KbArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&permissions),
        ));

        let display = Arc::new(DisplayService::new(
            Arc::clone(&article_queries),
            Arc::clone(&article_commands),
            permissions,
            templates,
        ));

        let display_preferences = Arc::new(DisplayPreferencesService::new(preferences_repo));

        Self {
            article_commands,
            article_queries,
            display,
            display_preferences,
            token_manager,
            session_store,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn session_store(&self) -> Arc<dyn SessionMessageStore> {
        Arc::clone(&self.session_store)
    }
}
