//! Authentication API handlers

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{LoginRequest, RegisterRequest, SessionResponse, UserInfo};
use crate::domain::{CreateUserDto, DomainError, UserRole};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::AuthHandlerState;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<SessionResponse> {
    // An unknown role can never match a user, so it is a credential failure.
    let role = UserRole::parse(&request.role).ok_or(DomainError::InvalidCredentials)?;

    let session = state
        .identity
        .login(&request.email, role, request.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(session.into())))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created and logged in", body = ApiResponse<SessionResponse>),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SessionResponse>>), ApiError> {
    let role = UserRole::parse(&request.role).ok_or_else(|| {
        DomainError::Validation("role: must be \"admin\" or \"caretaker\"".into())
    })?;

    let session = state
        .identity
        .register(CreateUserDto {
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(session.into()))))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user info", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> ApiResult<UserInfo> {
    Ok(Json(ApiResponse::success(user.into())))
}
