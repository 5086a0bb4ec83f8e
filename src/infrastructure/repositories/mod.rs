// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_kb_article;
mod postgres_permission;
mod postgres_preferences;

pub use error::map_sqlx;
pub use postgres_kb_article::{PostgresKbArticleReadRepository, PostgresKbArticleWriteRepository};
pub use postgres_permission::PostgresPermissionOracle;
pub use postgres_preferences::PostgresPortletPreferencesRepository;
