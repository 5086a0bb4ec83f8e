pub mod articles;
pub mod auth;
pub mod serde_time;

pub use articles::KbArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, Viewer};
