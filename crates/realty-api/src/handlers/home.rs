//! Listing and inquiry handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use realty_core::error::AppError;
use realty_core::types::{ApiResponse, HomeId};

use crate::dto::request::{CreateHomeRequest, InquireRequest, SearchHomesQuery, UpdateHomeRequest};
use crate::dto::response::{
    HomeResponse, HomeSummaryResponse, InquiryResponse, MessageResponse, RealtorResponse,
};
use crate::extractors::{AuthUser, PathParam, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /home?city=&minPrice=&maxPrice=&propertyType=
pub async fn search_homes(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchHomesQuery>,
) -> Result<Json<ApiResponse<Vec<HomeSummaryResponse>>>, AppError> {
    let homes = state.home_service.search(&query.into()).await?;
    Ok(Json(ApiResponse::ok(
        homes.into_iter().map(HomeSummaryResponse::from).collect(),
    )))
}

/// GET /home/{id}
pub async fn get_home(
    State(state): State<AppState>,
    PathParam(id): PathParam<HomeId>,
) -> Result<Json<ApiResponse<HomeResponse>>, AppError> {
    let home = state.home_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(home.into())))
}

/// POST /home
pub async fn create_home(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateHomeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HomeResponse>>), AppError> {
    let home = state.home_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(home.into()))))
}

/// PUT /home/{id}
pub async fn update_home(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<HomeId>,
    ValidatedJson(req): ValidatedJson<UpdateHomeRequest>,
) -> Result<Json<ApiResponse<HomeResponse>>, AppError> {
    state.home_service.ensure_owner(&auth, id, true).await?;
    let home = state.home_service.update(id, &req.into()).await?;
    Ok(Json(ApiResponse::ok(home.into())))
}

/// DELETE /home/{id}
pub async fn delete_home(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<HomeId>,
) -> Result<StatusCode, AppError> {
    state.home_service.ensure_owner(&auth, id, true).await?;
    state.home_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /home/{id}/realtor
pub async fn get_realtor(
    State(state): State<AppState>,
    PathParam(id): PathParam<HomeId>,
) -> Result<Json<ApiResponse<RealtorResponse>>, AppError> {
    let realtor = state.home_service.realtor_of(id).await?;
    Ok(Json(ApiResponse::ok(realtor.into())))
}

/// POST /home/{id}/inquire
pub async fn inquire(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<HomeId>,
    ValidatedJson(req): ValidatedJson<InquireRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InquiryResponse>>), AppError> {
    let message = state.home_service.inquire(&auth, id, &req.message).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(message.into()))))
}

/// GET /home/{id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<HomeId>,
) -> Result<Json<ApiResponse<Vec<MessageResponse>>>, AppError> {
    // Admins read only the inquiries on their own listings.
    state.home_service.ensure_owner(&auth, id, false).await?;
    let messages = state.home_service.messages_for(id).await?;
    Ok(Json(ApiResponse::ok(
        messages.into_iter().map(MessageResponse::from).collect(),
    )))
}
