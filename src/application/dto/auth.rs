use crate::domain::article::GroupId;
use crate::domain::user::{Capability, Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

/// Who is looking at a page, and from which site.
#[derive(Debug, Clone)]
pub struct Viewer {
    user: Option<AuthenticatedUser>,
    scope_group_id: GroupId,
}

impl Viewer {
    pub fn anonymous(scope_group_id: GroupId) -> Self {
        Self {
            user: None,
            scope_group_id,
        }
    }

    pub fn signed_in(user: AuthenticatedUser, scope_group_id: GroupId) -> Self {
        Self {
            user: Some(user),
            scope_group_id,
        }
    }

    pub fn new(user: Option<AuthenticatedUser>, scope_group_id: GroupId) -> Self {
        Self {
            user,
            scope_group_id,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn scope_group_id(&self) -> GroupId {
        self.scope_group_id
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.user
            .as_ref()
            .map(|u| u.has_capability(resource, action))
            .unwrap_or(false)
    }

    /// Role names used for resource permission lookups.
    pub fn role_names(&self) -> Vec<String> {
        match &self.user {
            Some(user) => vec!["user".to_string(), user.role.as_str().to_string()],
            None => vec!["guest".to_string()],
        }
    }
}
