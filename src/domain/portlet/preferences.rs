use crate::domain::article::GroupId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Preference naming the article a display instance shows by default.
pub const PREF_RESOURCE_PRIM_KEY: &str = "resourcePrimKey";

/// String-valued settings of one display instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortletPreferences {
    values: BTreeMap<String, String>,
}

impl PortletPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(name, value);
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Configured default article; unset or unparsable values read as `0`.
    pub fn resource_prim_key(&self) -> i64 {
        self.value(PREF_RESOURCE_PRIM_KEY)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

#[async_trait]
pub trait PortletPreferencesRepository: Send + Sync {
    async fn find(&self, group_id: GroupId, portlet_id: &str) -> DomainResult<PortletPreferences>;
    async fn store(
        &self,
        group_id: GroupId,
        portlet_id: &str,
        preferences: &PortletPreferences,
    ) -> DomainResult<()>;
}
