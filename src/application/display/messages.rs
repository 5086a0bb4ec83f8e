use std::collections::BTreeSet;

/// Message key of the default "your request completed successfully" banner.
pub const SUCCESS_MESSAGE_KEY: &str = "request_processed";

/// Suffix of the per-portlet message key that suppresses the default error banner.
pub const HIDE_DEFAULT_ERROR_MESSAGE_SUFFIX: &str = "_hideDefaultErrorMessage";

pub const ACTION_UPDATE_COMMENT: &str = "updateKBComment";

// These flows render their own feedback.
const ACTIONS_WITHOUT_SUCCESS_MESSAGE: [&str; 2] =
    [super::actions::ACTION_DELETE_ARTICLE, ACTION_UPDATE_COMMENT];

pub fn hide_default_error_message_key(portlet_id: &str) -> String {
    format!("{portlet_id}{HIDE_DEFAULT_ERROR_MESSAGE_SUFFIX}")
}

/// Messages produced while handling the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageContext {
    keys: BTreeSet<String>,
}

impl MessageContext {
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
        }
    }

    pub fn add(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Record the default success banner for a completed action, except for
/// actions that report their own outcome.
pub fn add_success_message(action_name: &str, messages: &mut MessageContext) {
    if ACTIONS_WITHOUT_SUCCESS_MESSAGE.contains(&action_name) {
        return;
    }

    messages.add(SUCCESS_MESSAGE_KEY);
}
