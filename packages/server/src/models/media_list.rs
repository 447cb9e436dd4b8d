use chrono::{DateTime, Utc};
use common::{ListKind, MediaType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shared::validate_media_id;
use crate::entity::user_media;
use crate::error::AppError;

/// Request body for adding a media item to one of the user's lists.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct AddMediaRequest {
    /// External media id (1-64 characters).
    #[schema(example = "tt1234567")]
    pub media_id: String,
    /// Kind of media. Ignored if the item is already on another of the user's lists.
    pub media_type: MediaType,
}

/// Parse the `{kind}` path segment.
pub fn parse_list_kind(kind: &str) -> Result<ListKind, AppError> {
    kind.parse::<ListKind>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Validate the add request, returning the normalized media id.
pub fn validate_add_media_request(payload: &AddMediaRequest) -> Result<String, AppError> {
    validate_media_id(&payload.media_id)
}

/// A media row seen through one list: only that list's timestamp is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct MediaListEntry {
    /// Row id, stable across lists for the same user and media item.
    pub id: Uuid,
    /// The list this projection was taken from.
    pub source_kind: ListKind,
    #[schema(example = 456)]
    pub user_id: i32,
    pub media_type: MediaType,
    #[schema(example = "tt1234567")]
    pub media_id: String,
    /// When the item was (most recently) added to this list.
    pub added_at: DateTime<Utc>,
}

impl MediaListEntry {
    /// Project a row onto `kind`. Returns `None` if the row is not on that list.
    pub fn project(row: user_media::Model, kind: ListKind) -> Option<Self> {
        let added_at = row.added_at(kind)?;
        if !row.in_list(kind) {
            return None;
        }
        Some(Self {
            id: row.id,
            source_kind: kind,
            user_id: row.user_id,
            media_type: row.media_type,
            media_id: row.media_id,
            added_at,
        })
    }
}
