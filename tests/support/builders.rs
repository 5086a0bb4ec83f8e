// tests/support/builders.rs
use super::mocks::{fixed_now, security::user_with_role};
use kb_display::application::display::{RenderParams, RenderRequest};
use kb_display::application::dto::Viewer;
use kb_display::domain::article::{
    ArticleContent, ArticleTitle, GroupId, KbArticle, ResourcePrimKey, UrlTitle, WorkflowStatus,
};
use kb_display::domain::portlet::{PREF_RESOURCE_PRIM_KEY, PortletPreferences};
use kb_display::domain::user::{Role, UserId};

pub const GROUP_ID: i64 = 20;
pub const PORTLET_ID: &str = "kbdisplay";

pub fn group() -> GroupId {
    GroupId::new(GROUP_ID).expect("valid group id")
}

pub fn anonymous() -> Viewer {
    Viewer::anonymous(group())
}

pub fn signed_in(user_id: i64, role: Role) -> Viewer {
    Viewer::signed_in(user_with_role(user_id, role), group())
}

pub fn preferences_with_default(resource_prim_key: i64) -> PortletPreferences {
    PortletPreferences::new().with_value(PREF_RESOURCE_PRIM_KEY, resource_prim_key.to_string())
}

pub fn render_request(
    viewer: Viewer,
    preferences: PortletPreferences,
    params: RenderParams,
) -> RenderRequest {
    RenderRequest {
        portlet_id: PORTLET_ID.to_string(),
        viewer,
        preferences,
        params,
    }
}

/// Builder for stored article versions.
pub struct ArticleBuilder {
    kb_article_id: i64,
    resource_prim_key: i64,
    group_id: i64,
    parent_resource_prim_key: i64,
    version: i32,
    title: String,
    url_title: Option<String>,
    priority: f64,
    status: WorkflowStatus,
    user_id: i64,
}

impl ArticleBuilder {
    pub fn new(resource_prim_key: i64) -> Self {
        Self {
            kb_article_id: resource_prim_key * 100 + 1,
            resource_prim_key,
            group_id: GROUP_ID,
            parent_resource_prim_key: 0,
            version: 1,
            title: format!("Article {resource_prim_key}"),
            url_title: None,
            priority: 1.0,
            status: WorkflowStatus::Approved,
            user_id: 1,
        }
    }

    pub fn version(mut self, version: i32) -> Self {
        self.kb_article_id = self.resource_prim_key * 100 + i64::from(version);
        self.version = version;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn url_title(mut self, url_title: &str) -> Self {
        self.url_title = Some(url_title.to_string());
        self
    }

    pub fn group(mut self, group_id: i64) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn parent(mut self, parent: i64) -> Self {
        self.parent_resource_prim_key = parent;
        self
    }

    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    pub fn status(mut self, status: WorkflowStatus) -> Self {
        self.status = status;
        self
    }

    pub fn author(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn build(self) -> KbArticle {
        let url_title = self
            .url_title
            .unwrap_or_else(|| format!("article-{}", self.resource_prim_key));
        KbArticle {
            kb_article_id: self.kb_article_id,
            resource_prim_key: ResourcePrimKey(self.resource_prim_key),
            group_id: GroupId::new(self.group_id).expect("valid group id"),
            parent_resource_prim_key: self.parent_resource_prim_key,
            version: self.version,
            title: ArticleTitle::new(self.title).expect("valid title"),
            url_title: UrlTitle::new(url_title).expect("valid url title"),
            content: ArticleContent::new(format!("content of {}", self.resource_prim_key))
                .expect("valid content"),
            priority: self.priority,
            status: self.status,
            user_id: UserId::new(self.user_id).expect("valid user id"),
            created_at: fixed_now(),
            modified_at: fixed_now(),
        }
    }
}
