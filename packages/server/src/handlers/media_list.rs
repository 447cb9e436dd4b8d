use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::media_list::*;
use crate::models::shared::{validate_media_id, validate_user_id};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{user_id}/lists/{kind}",
    tag = "Media Lists",
    operation_id = "listMedia",
    summary = "List the items on one of a user's lists",
    description = "Returns every item on the watchlist, favorites or watched list, most recently added first. The list is not paginated.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = common::ListKind, Path, description = "List: watchlist, favorites or watched"),
    ),
    responses(
        (status = 200, description = "Items on the list", body = Vec<MediaListEntry>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own list (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id, kind))]
pub async fn list_media(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(i32, String)>,
) -> Result<Json<Vec<MediaListEntry>>, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;
    let kind = parse_list_kind(&kind)?;

    let entries = state.media_lists.list(user_id, kind).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/{user_id}/lists/{kind}",
    tag = "Media Lists",
    operation_id = "addMedia",
    summary = "Add an item to one of a user's lists",
    description = "Adds the item to the list, or refreshes its added-at time if it is already there. Membership in the user's other lists is unchanged, and an item keeps the media type it was first added with.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = common::ListKind, Path, description = "List: watchlist, favorites or watched"),
    ),
    request_body = AddMediaRequest,
    responses(
        (status = 201, description = "Item is on the list", body = MediaListEntry),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own list (PERMISSION_DENIED)", body = ErrorBody),
        (status = 409, description = "Conflicting row state (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id, kind, media_id = %payload.media_id))]
pub async fn add_media(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(i32, String)>,
    AppJson(payload): AppJson<AddMediaRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;
    let kind = parse_list_kind(&kind)?;
    let media_id = validate_add_media_request(&payload)?;

    let entry = state
        .media_lists
        .add(user_id, &media_id, payload.media_type, kind)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    delete,
    path = "/{user_id}/lists/{kind}/{media_id}",
    tag = "Media Lists",
    operation_id = "removeMedia",
    summary = "Remove an item from one of a user's lists",
    description = "Removes the item from the list. Succeeds even if the item was not on it. Once an item is on none of the user's lists it is forgotten entirely.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = common::ListKind, Path, description = "List: watchlist, favorites or watched"),
        ("media_id" = String, Path, description = "External media ID"),
    ),
    responses(
        (status = 204, description = "Item is not on the list"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own list (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id, kind, media_id))]
pub async fn remove_media(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path((user_id, kind, media_id)): Path<(i32, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;
    let kind = parse_list_kind(&kind)?;
    let media_id = validate_media_id(&media_id)?;

    state.media_lists.remove(user_id, &media_id, kind).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/{user_id}/lists/{kind}",
    tag = "Media Lists",
    operation_id = "clearList",
    summary = "Remove every item from one of a user's lists",
    description = "Empties the list. Items that were on no other list are forgotten. Succeeds on an already empty list.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = common::ListKind, Path, description = "List: watchlist, favorites or watched"),
    ),
    responses(
        (status = 204, description = "List is empty"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the caller's own list (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id, kind))]
pub async fn clear_list(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    validate_user_id(user_id)?;
    auth_user.require_self(user_id)?;
    let kind = parse_list_kind(&kind)?;

    state.media_lists.remove_all(user_id, kind).await?;
    Ok(StatusCode::NO_CONTENT)
}
