use std::sync::Arc;

use crate::application::ports::permission::PermissionOracle;
use crate::domain::article::KbArticleReadRepository;

/// Read side of the article store. Single-article reads enforce VIEW permission.
pub struct KbArticleQueryService {
    pub(super) read_repo: Arc<dyn KbArticleReadRepository>,
    pub(super) permissions: Arc<dyn PermissionOracle>,
}

impl KbArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn KbArticleReadRepository>,
        permissions: Arc<dyn PermissionOracle>,
    ) -> Self {
        Self {
            read_repo,
            permissions,
        }
    }
}
