use crate::domain::article::DEFAULT_PARENT_RESOURCE_PRIM_KEY;

pub const PARAM_URL_TITLE: &str = "urlTitle";
pub const PARAM_PARENT_RESOURCE_PRIM_KEY: &str = "parentResourcePrimKey";
pub const PARAM_RESOURCE_PRIM_KEY: &str = "resourcePrimKey";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_MVC_PATH: &str = "mvcPath";

/// Raw request parameters consumed by a render, exactly as they arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderParams {
    pub url_title: Option<String>,
    pub parent_resource_prim_key: Option<String>,
    pub resource_prim_key: Option<String>,
    pub status: Option<String>,
    pub mvc_path: Option<String>,
}

impl RenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parameter lookup such as a query-string map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url_title: lookup(PARAM_URL_TITLE),
            parent_resource_prim_key: lookup(PARAM_PARENT_RESOURCE_PRIM_KEY),
            resource_prim_key: lookup(PARAM_RESOURCE_PRIM_KEY),
            status: lookup(PARAM_STATUS),
            mvc_path: lookup(PARAM_MVC_PATH),
        }
    }

    pub fn with_url_title(mut self, value: impl Into<String>) -> Self {
        self.url_title = Some(value.into());
        self
    }

    pub fn with_parent_resource_prim_key(mut self, value: impl Into<String>) -> Self {
        self.parent_resource_prim_key = Some(value.into());
        self
    }

    pub fn with_resource_prim_key(mut self, value: impl Into<String>) -> Self {
        self.resource_prim_key = Some(value.into());
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_mvc_path(mut self, value: impl Into<String>) -> Self {
        self.mvc_path = Some(value.into());
        self
    }

    /// Url title when present and not blank.
    pub fn url_title(&self) -> Option<&str> {
        self.url_title
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Requested view path, empty when absent.
    pub fn mvc_path(&self) -> &str {
        self.mvc_path.as_deref().unwrap_or("")
    }

    pub fn resource_prim_key(&self, default: i64) -> i64 {
        parse_long(self.resource_prim_key.as_deref(), default)
    }

    pub fn parent_resource_prim_key(&self) -> i64 {
        parse_long(
            self.parent_resource_prim_key.as_deref(),
            DEFAULT_PARENT_RESOURCE_PRIM_KEY,
        )
    }

    /// Requested status code; `None` when absent or unparsable. The code is
    /// not checked against the known statuses.
    pub fn status_code(&self) -> Option<i32> {
        self.status
            .as_deref()
            .and_then(|value| value.trim().parse::<i32>().ok())
    }
}

fn parse_long(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::WorkflowStatus;

    #[test]
    fn blank_url_title_counts_as_absent() {
        assert_eq!(RenderParams::new().with_url_title("  ").url_title(), None);
        assert_eq!(
            RenderParams::new().with_url_title(" faq ").url_title(),
            Some("faq")
        );
    }

    #[test]
    fn unparsable_keys_fall_back_to_the_default() {
        let params = RenderParams::new().with_resource_prim_key("seven");
        assert_eq!(params.resource_prim_key(5), 5);
        assert_eq!(RenderParams::new().resource_prim_key(9), 9);
        assert_eq!(
            RenderParams::new()
                .with_resource_prim_key(" 7 ")
                .resource_prim_key(5),
            7
        );
    }

    #[test]
    fn parent_defaults_to_the_root_sentinel() {
        assert_eq!(
            RenderParams::new().parent_resource_prim_key(),
            DEFAULT_PARENT_RESOURCE_PRIM_KEY
        );
        assert_eq!(
            RenderParams::new()
                .with_parent_resource_prim_key("12")
                .parent_resource_prim_key(),
            12
        );
    }

    #[test]
    fn status_code_keeps_unknown_codes() {
        assert_eq!(RenderParams::new().with_status(" 2 ").status_code(), Some(2));
        assert_eq!(RenderParams::new().with_status("abc").status_code(), None);
        assert_eq!(RenderParams::new().with_status("99").status_code(), Some(99));
    }

    #[test]
    fn from_lookup_reads_every_parameter() {
        let params = RenderParams::from_lookup(|name| match name {
            PARAM_URL_TITLE => Some("faq".into()),
            PARAM_STATUS => Some("-1".into()),
            PARAM_MVC_PATH => Some("/display/view.jsp".into()),
            _ => None,
        });
        assert_eq!(params.url_title(), Some("faq"));
        assert_eq!(params.status_code(), Some(WorkflowStatus::Any.code()));
        assert_eq!(params.mvc_path(), "/display/view.jsp");
        assert!(params.resource_prim_key.is_none());
    }
}
