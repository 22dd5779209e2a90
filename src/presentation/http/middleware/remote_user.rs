// src/presentation/http/middleware/remote_user.rs
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Identity of the requesting user as reported by the fronting proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestUser {
    #[default]
    Anonymous,
    Authenticated {
        username: String,
    },
}

impl RequestUser {
    #[must_use]
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self::Authenticated {
            username: username.into(),
        }
    }

    /// Empty for anonymous users.
    #[must_use]
    pub fn username(&self) -> &str {
        match self {
            Self::Anonymous => "",
            Self::Authenticated { username } => username,
        }
    }
}

pub async fn remote_user_middleware(
    State(state): State<HttpState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = request
        .headers()
        .get(&state.settings.remote_user_header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or(RequestUser::Anonymous, RequestUser::authenticated);

    request.extensions_mut().insert(user);
    next.run(request).await
}
