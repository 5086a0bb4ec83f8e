pub mod entity;
pub mod repository;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entity::{KbArticle, NewKbArticle};
pub use repository::{KbArticleReadRepository, KbArticleWriteRepository};
pub use status::{WorkflowAction, WorkflowStatus};
pub use value_objects::{
    ArticleContent, ArticleTitle, DEFAULT_PARENT_RESOURCE_PRIM_KEY, GroupId, ResourcePrimKey,
    UrlTitle,
};
