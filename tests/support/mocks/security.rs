// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use kb_display::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use kb_display::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const MEMBER_TOKEN: &str = "member-token";

pub const ADMIN_ID: i64 = 1;
pub const EDITOR_ID: i64 = 2;
pub const MEMBER_ID: i64 = 3;

/// Maps fixed bearer tokens onto users with the given role's default capabilities.
pub fn user_with_role(id: i64, role: Role) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: format!("{role}-{id}"),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(user_with_role(ADMIN_ID, Role::Admin)),
            EDITOR_TOKEN => Ok(user_with_role(EDITOR_ID, Role::Editor)),
            MEMBER_TOKEN => Ok(user_with_role(MEMBER_ID, Role::Member)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
