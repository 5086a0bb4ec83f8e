pub mod article;
pub mod errors;
pub mod portlet;
pub mod user;
