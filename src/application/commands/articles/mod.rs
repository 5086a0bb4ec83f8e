// src/application/commands/articles/mod.rs
mod capability;
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::KbArticleCommandService;
pub use update::UpdateArticleCommand;
