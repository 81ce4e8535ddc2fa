//! Auth handlers: sign-up, sign-in, product keys, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use realty_core::error::AppError;
use realty_core::types::ApiResponse;
use realty_entity::user::UserRole;

use crate::dto::request::{ProductKeyRequest, SignInRequest, SignUpRequest};
use crate::dto::response::{ProductKeyResponse, TokenResponse, UserProfileResponse};
use crate::extractors::{AuthUser, PathParam, ValidatedJson};
use crate::state::AppState;

/// POST /auth/signup/{role}
pub async fn sign_up(
    State(state): State<AppState>,
    PathParam(role): PathParam<String>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), AppError> {
    let role: UserRole = role.parse()?;
    let token = state.auth_service.sign_up(req.into(), role).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TokenResponse { token })),
    ))
}

/// POST /auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    let token = state.auth_service.sign_in(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}

/// POST /auth/key
pub async fn generate_product_key(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ProductKeyRequest>,
) -> Result<Json<ApiResponse<ProductKeyResponse>>, AppError> {
    let product_key = state
        .auth_service
        .generate_product_key(&req.email, req.role)?;
    Ok(Json(ApiResponse::ok(ProductKeyResponse { product_key })))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserProfileResponse>>, AppError> {
    let user = state.auth_service.current_user(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
