use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::KbArticleReadRepository;
use crate::domain::article::value_objects::{ArticleTitle, GroupId, ResourcePrimKey, UrlTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing url titles that are unique within a group.
pub struct UrlTitleService {
    read_repo: Arc<dyn KbArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl UrlTitleService {
    pub fn new(
        read_repo: Arc<dyn KbArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_url_title(
        &self,
        group_id: GroupId,
        title: &ArticleTitle,
        ignore: Option<ResourcePrimKey>,
    ) -> DomainResult<UrlTitle> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            format!("article-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let url_title = UrlTitle::new(candidate.clone())?;
            match self.read_repo.find_by_url_title(group_id, &url_title).await? {
                Some(existing) if Some(existing.resource_prim_key) == ignore => {
                    return Ok(url_title);
                }
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(url_title),
            }
        }
    }
}
