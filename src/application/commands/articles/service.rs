// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{permission::PermissionOracle, time::Clock},
    domain::article::{
        KbArticleReadRepository, KbArticleWriteRepository, services::UrlTitleService,
    },
};

pub struct KbArticleCommandService {
    pub(super) write_repo: Arc<dyn KbArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn KbArticleReadRepository>,
    pub(super) permissions: Arc<dyn PermissionOracle>,
    pub(super) url_titles: Arc<UrlTitleService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl KbArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn KbArticleWriteRepository>,
        read_repo: Arc<dyn KbArticleReadRepository>,
        permissions: Arc<dyn PermissionOracle>,
        url_titles: Arc<UrlTitleService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            permissions,
            url_titles,
            clock,
        }
    }
}
