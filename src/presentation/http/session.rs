use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    response::Response,
};
use headers::{Cookie, HeaderMapExt};
use std::convert::Infallible;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "kb_session";

/// Browser session carrying error and message keys between requests.
#[derive(Debug, Clone)]
pub struct PortalSession {
    id: String,
    is_new: bool,
}

impl PortalSession {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Issue the session cookie on `response` when the session was created by this request.
    pub fn attach(&self, response: &mut Response) {
        if !self.is_new {
            return;
        }
        let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
}

fn is_valid_session_id(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

impl<S> FromRequestParts<S> for PortalSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let existing = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
            .filter(|id| is_valid_session_id(id));

        Ok(match existing {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4().to_string(),
                is_new: true,
            },
        })
    }
}
