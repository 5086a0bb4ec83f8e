use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parent key meaning "no parent was given": the article sits at the root of its group.
pub const DEFAULT_PARENT_RESOURCE_PRIM_KEY: i64 = 0;

const URL_TITLE_MAX_LEN: usize = 255;

/// Stable identifier shared by every version of a knowledge-base article.
///
/// `0` is a legal value and means that no article is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourcePrimKey(pub i64);

impl ResourcePrimKey {
    pub const NONE: Self = Self(0);

    pub fn is_selected(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for ResourcePrimKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ResourcePrimKey> for i64 {
    fn from(value: ResourcePrimKey) -> Self {
        value.0
    }
}

impl fmt::Display for ResourcePrimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub i64);

impl GroupId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("group id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<GroupId> for i64 {
    fn from(value: GroupId) -> Self {
        value.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human readable path segment that addresses an article inside its group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTitle(String);

impl UrlTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("url title cannot be empty".into()));
        }
        if trimmed.len() > URL_TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "url title must be at most {URL_TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UrlTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
