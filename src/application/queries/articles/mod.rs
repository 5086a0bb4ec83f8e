mod get_by_url_title;
mod get_latest;
mod list_group;
mod service;

pub use get_by_url_title::GetArticleByUrlTitleQuery;
pub use get_latest::GetLatestArticleQuery;
pub use list_group::ListGroupArticlesQuery;
pub use service::KbArticleQueryService;
