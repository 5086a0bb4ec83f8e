// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_store;
pub mod permission;
pub mod preferences;
pub mod security;
pub mod time;
pub mod util;

pub use article_store::InMemoryArticleStore;
pub use permission::MockPermissionOracle;
pub use preferences::InMemoryPreferencesRepo;
pub use security::{ADMIN_TOKEN, DummyTokenManager, EDITOR_TOKEN, MEMBER_TOKEN};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
