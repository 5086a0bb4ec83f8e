/// View path of the screen used to pick the configured article.
pub const SELECT_CONFIGURATION_ARTICLE_PATH: &str = "/display/select_configuration_article.jsp";

/// Template locations of a display instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTemplates {
    template_path: String,
    view_template: String,
}

impl DisplayTemplates {
    pub fn new(template_path: impl Into<String>, view_template: impl Into<String>) -> Self {
        Self {
            template_path: template_path.into(),
            view_template: view_template.into(),
        }
    }

    pub fn template_path(&self) -> &str {
        &self.template_path
    }

    pub fn view_template(&self) -> &str {
        &self.view_template
    }

    pub fn error_template(&self) -> String {
        format!("{}error.jsp", self.template_path)
    }

    pub fn edit_article_template(&self) -> String {
        format!("{}edit_article.jsp", self.template_path)
    }
}

impl Default for DisplayTemplates {
    fn default() -> Self {
        Self::new("/display/", "/display/view.jsp")
    }
}
