use crate::application::error::ApplicationError;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Error classes a display instance answers with its error template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionErrorKey {
    NoSuchArticle,
    NoSuchComment,
    NoSuchSubscription,
    /// The viewer is not permitted to see the requested resource.
    Principal,
}

impl SessionErrorKey {
    pub const ALL: [SessionErrorKey; 4] = [
        SessionErrorKey::NoSuchArticle,
        SessionErrorKey::NoSuchComment,
        SessionErrorKey::NoSuchSubscription,
        SessionErrorKey::Principal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionErrorKey::NoSuchArticle => "no_such_article",
            SessionErrorKey::NoSuchComment => "no_such_comment",
            SessionErrorKey::NoSuchSubscription => "no_such_subscription",
            SessionErrorKey::Principal => "principal",
        }
    }
}

impl fmt::Display for SessionErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionErrorKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionErrorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

impl ApplicationError {
    /// Session error class of this failure, if it is one the display answers itself.
    pub fn session_error_key(&self) -> Option<SessionErrorKey> {
        match self {
            ApplicationError::ArticleNotFound(_) => Some(SessionErrorKey::NoSuchArticle),
            ApplicationError::CommentNotFound(_) => Some(SessionErrorKey::NoSuchComment),
            ApplicationError::SubscriptionNotFound(_) => Some(SessionErrorKey::NoSuchSubscription),
            ApplicationError::Forbidden(_) => Some(SessionErrorKey::Principal),
            _ => None,
        }
    }
}

/// Errors pending for the current request.
///
/// Seeded from the session store before a render, extended by the render
/// itself, and read by dispatch to pick the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    keys: BTreeSet<String>,
    hide_default_error_message: bool,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            hide_default_error_message: false,
        }
    }

    pub fn add(&mut self, key: SessionErrorKey) {
        self.keys.insert(key.as_str().to_string());
    }

    pub fn contains(&self, key: SessionErrorKey) -> bool {
        self.keys.contains(key.as_str())
    }

    /// Whether any error class that diverts rendering to the error template is pending.
    pub fn requires_error_view(&self) -> bool {
        SessionErrorKey::ALL.iter().any(|key| self.contains(*key))
    }

    pub fn hide_default_error_message(&mut self) {
        self.hide_default_error_message = true;
    }

    pub fn is_default_error_message_hidden(&self) -> bool {
        self.hide_default_error_message
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
