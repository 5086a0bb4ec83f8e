use super::{
    edit_url::build_edit_url,
    errors::ErrorContext,
    messages::{MessageContext, add_success_message},
    service::DisplayService,
};
use crate::{
    application::{
        commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        dto::{KbArticleDto, Viewer},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{DEFAULT_PARENT_RESOURCE_PRIM_KEY, WorkflowAction},
};
use serde::Deserialize;

pub const ACTION_CREATE_ARTICLE: &str = "createKBArticle";
pub const ACTION_UPDATE_ARTICLE: &str = "updateKBArticle";
pub const ACTION_DELETE_ARTICLE: &str = "deleteKBArticle";

/// Actions a display instance accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    CreateArticle,
    UpdateArticle,
    DeleteArticle,
}

impl DisplayAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ACTION_CREATE_ARTICLE => Some(DisplayAction::CreateArticle),
            ACTION_UPDATE_ARTICLE => Some(DisplayAction::UpdateArticle),
            ACTION_DELETE_ARTICLE => Some(DisplayAction::DeleteArticle),
            _ => None,
        }
    }
}

/// Fields an action submission may carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub resource_prim_key: Option<i64>,
    #[serde(default)]
    pub parent_resource_prim_key: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url_title: Option<String>,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default)]
    pub workflow_action: WorkflowAction,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub portlet_id: String,
    pub viewer: Viewer,
    pub action_name: String,
    /// Page hosting the display instance.
    pub layout_url: String,
    pub form: ActionForm,
}

/// Result of an action: where to go next and what to tell the next render.
#[derive(Debug, Clone, Default)]
pub struct ActionOutcome {
    pub redirect: String,
    pub errors: ErrorContext,
    pub messages: MessageContext,
    pub article: Option<KbArticleDto>,
}

impl DisplayService {
    /// Run an action. Failures of a session error class are recorded in the
    /// outcome for the next render; any other failure is returned.
    pub async fn process_action(&self, request: &ActionRequest) -> ApplicationResult<ActionOutcome> {
        let action = DisplayAction::from_name(&request.action_name).ok_or_else(|| {
            ApplicationError::validation(format!("unknown action '{}'", request.action_name))
        })?;

        let redirect = request
            .form
            .redirect
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(&request.layout_url)
            .to_string();

        let mut outcome = ActionOutcome {
            redirect,
            ..ActionOutcome::default()
        };

        match self.run_action(action, request).await {
            Ok(article) => {
                add_success_message(&request.action_name, &mut outcome.messages);

                if let Some(article) = &article {
                    if request.form.workflow_action == WorkflowAction::SaveDraft {
                        outcome.redirect = build_edit_url(
                            &request.layout_url,
                            &request.portlet_id,
                            &outcome.redirect,
                            &self.templates,
                            article,
                        )?;
                    }
                }
                outcome.article = article;
                Ok(outcome)
            }
            Err(err) => match err.session_error_key() {
                Some(key) => {
                    tracing::info!(
                        portlet_id = %request.portlet_id,
                        action = %request.action_name,
                        error = %err,
                        "action failed with session error"
                    );
                    outcome.errors.add(key);
                    Ok(outcome)
                }
                None => Err(err),
            },
        }
    }

    async fn run_action(
        &self,
        action: DisplayAction,
        request: &ActionRequest,
    ) -> ApplicationResult<Option<KbArticleDto>> {
        let form = &request.form;
        let viewer = &request.viewer;

        match action {
            DisplayAction::CreateArticle => {
                let command = CreateArticleCommand {
                    title: required(&form.title, "title")?,
                    content: required(&form.content, "content")?,
                    url_title: form.url_title.clone(),
                    parent_resource_prim_key: form
                        .parent_resource_prim_key
                        .unwrap_or(DEFAULT_PARENT_RESOURCE_PRIM_KEY),
                    priority: form.priority,
                    workflow_action: form.workflow_action,
                };
                let article = self.article_commands.create_article(viewer, command).await?;
                Ok(Some(article))
            }
            DisplayAction::UpdateArticle => {
                let command = UpdateArticleCommand {
                    resource_prim_key: resource_prim_key(form)?,
                    title: form.title.clone(),
                    content: form.content.clone(),
                    url_title: form.url_title.clone(),
                    priority: form.priority,
                    workflow_action: form.workflow_action,
                };
                let article = self.article_commands.update_article(viewer, command).await?;
                Ok(Some(article))
            }
            DisplayAction::DeleteArticle => {
                let command = DeleteArticleCommand {
                    resource_prim_key: resource_prim_key(form)?,
                };
                self.article_commands.delete_article(viewer, command).await?;
                Ok(None)
            }
        }
    }
}

fn required(value: &Option<String>, field: &str) -> ApplicationResult<String> {
    value
        .clone()
        .ok_or_else(|| ApplicationError::validation(format!("{field} is required")))
}

fn resource_prim_key(form: &ActionForm) -> ApplicationResult<i64> {
    form.resource_prim_key
        .filter(|key| *key > 0)
        .ok_or_else(|| ApplicationError::validation("resource_prim_key is required"))
}
