use super::{
    errors::ErrorContext,
    service::{DisplayService, RenderRequest},
};

/// Template chosen for a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    Content(String),
    Error(String),
}

impl DispatchTarget {
    pub fn path(&self) -> &str {
        match self {
            DispatchTarget::Content(path) | DispatchTarget::Error(path) => path,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DispatchTarget::Error(_))
    }
}

impl DisplayService {
    pub fn dispatch(&self, request: &RenderRequest, errors: &ErrorContext) -> DispatchTarget {
        if errors.requires_error_view() {
            return DispatchTarget::Error(self.templates.error_template());
        }

        let mvc_path = request.params.mvc_path();
        if mvc_path.is_empty() {
            DispatchTarget::Content(self.templates.view_template().to_string())
        } else {
            DispatchTarget::Content(mvc_path.to_string())
        }
    }
}
