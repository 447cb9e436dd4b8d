use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::avatar::{AvatarOption, SetAvatarRequest};
use crate::models::shared::{validate_avatar_id, validate_user_id};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Avatars",
    operation_id = "listAvatars",
    summary = "List the avatar catalog",
    description = "Returns every selectable avatar ordered by ID. The catalog is static, so clients may cache it.",
    responses(
        (status = 200, description = "Avatar catalog", body = Vec<AvatarOption>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_avatars(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvatarOption>>, AppError> {
    Ok(Json(state.avatars.list_catalog().await?))
}

#[utoipa::path(
    get,
    path = "/{user_id}/avatar",
    tag = "Avatars",
    operation_id = "getUserAvatar",
    summary = "Get a user's avatar",
    description = "Returns the avatar the user chose, or the catalog default if they have not chosen one.",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Effective avatar", body = AvatarOption),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own profile (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "No assignment and no default avatar (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id))]
pub async fn get_user_avatar(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<AvatarOption>, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;

    Ok(Json(state.avatars.get_assignment(user_id).await?))
}

#[utoipa::path(
    put,
    path = "/{user_id}/avatar",
    tag = "Avatars",
    operation_id = "setUserAvatar",
    summary = "Choose a user's avatar",
    description = "Replaces the user's avatar with the given catalog entry. Returns 404 without changing anything if the avatar does not exist.",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = SetAvatarRequest,
    responses(
        (status = 200, description = "Avatar assigned", body = AvatarOption),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own profile (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Avatar not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id, avatar_id = payload.avatar_id))]
pub async fn set_user_avatar(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    AppJson(payload): AppJson<SetAvatarRequest>,
) -> Result<Json<AvatarOption>, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;
    validate_avatar_id(payload.avatar_id)?;

    let assigned = state
        .avatars
        .set_assignment(user_id, payload.avatar_id)
        .await?;
    Ok(Json(assigned))
}
