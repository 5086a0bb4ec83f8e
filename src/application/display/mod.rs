//! Display surface of the knowledge base: decides which article a display
//! instance shows, at which workflow status, and which template renders it.
//!
//! The decision functions take plain values ([`RenderRequest`], [`ErrorContext`])
//! so they run without any HTTP machinery; `presentation::http` adapts axum
//! requests onto them.
mod actions;
mod dispatch;
mod edit_url;
mod errors;
mod messages;
mod params;
mod preferences;
mod render;
mod resource;
mod service;
mod status;
mod templates;

pub use actions::{
    ACTION_CREATE_ARTICLE, ACTION_DELETE_ARTICLE, ACTION_UPDATE_ARTICLE, ActionForm,
    ActionOutcome, ActionRequest, DisplayAction,
};
pub use dispatch::DispatchTarget;
pub use edit_url::{build_edit_url, portlet_namespace, set_parameter};
pub use errors::{ErrorContext, SessionErrorKey};
pub use messages::{
    ACTION_UPDATE_COMMENT, HIDE_DEFAULT_ERROR_MESSAGE_SUFFIX, MessageContext,
    SUCCESS_MESSAGE_KEY, add_success_message, hide_default_error_message_key,
};
pub use params::{
    PARAM_MVC_PATH, PARAM_PARENT_RESOURCE_PRIM_KEY, PARAM_RESOURCE_PRIM_KEY, PARAM_STATUS,
    PARAM_URL_TITLE, RenderParams,
};
pub use preferences::DisplayPreferencesService;
pub use render::RenderOutcome;
pub use service::{DisplayService, RenderRequest};
pub use templates::{DisplayTemplates, SELECT_CONFIGURATION_ARTICLE_PATH};
