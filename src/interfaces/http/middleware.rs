//! Authentication middleware for Axum
//!
//! Guards every data endpoint: requests without a valid bearer token get a
//! 401 and the front-end sends the user back to `/login`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::application::IdentityService;
use crate::domain::User;
use crate::interfaces::http::common::ApiError;

/// Authentication state shared by all guarded routers
#[derive(Clone)]
pub struct AuthState {
    pub identity: Arc<IdentityService>,
}

/// The user a request was authenticated as, stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub User);

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// JWT bearer authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return ApiError::unauthorized("Missing authentication token").into_response();
    };

    let Some(token) = extract_token(auth_header) else {
        return ApiError::unauthorized("Invalid authentication token").into_response();
    };

    match auth_state.identity.authenticate(token).await {
        Ok(user) => {
            tracing::Span::current().record("user_id", user.id.as_str());
            request.extensions_mut().insert(AuthenticatedUser(user));
            next.run(request).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_token("Bearer   "), None);
        assert_eq!(extract_token("Basic dXNlcg=="), None);
        assert_eq!(extract_token("abc.def"), None);
    }
}
