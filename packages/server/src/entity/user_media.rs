use common::{ListKind, MediaType};
use sea_orm::Condition;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per (user, media) pair. The three lists are flag projections of it.
///
/// Invariants kept by the media list store:
/// * `(user_id, media_id)` is unique (index created in `seed::ensure_indexes`).
/// * each flag is true iff its paired timestamp is set.
/// * a row with every flag false is deleted in the same transaction that cleared the last flag.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_media")]
pub struct Model {
    /// UUIDv7 primary key, assigned on first insert.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: i32,

    /// External catalog id, e.g. an IMDB id.
    pub media_id: String,

    /// Fixed by the first insert; later upserts never touch it.
    pub media_type: MediaType,

    pub is_watchlist: bool,
    pub is_favorite: bool,
    pub is_watched: bool,

    pub watchlist_added_at: Option<DateTimeUtc>,
    pub favorite_added_at: Option<DateTimeUtc>,
    pub watched_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

// The generated `Column` enum does not derive `PartialEq`/`Eq`; equivalent to the derive.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Eq for Column {}

/// The flag/timestamp column pair a list kind operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListColumns {
    pub flag: Column,
    pub added_at: Column,
}

/// Dispatch table from list kind to its columns.
pub fn list_columns(kind: ListKind) -> ListColumns {
    match kind {
        ListKind::Watchlist => ListColumns {
            flag: Column::IsWatchlist,
            added_at: Column::WatchlistAddedAt,
        },
        ListKind::Favorites => ListColumns {
            flag: Column::IsFavorite,
            added_at: Column::FavoriteAddedAt,
        },
        ListKind::Watched => ListColumns {
            flag: Column::IsWatched,
            added_at: Column::WatchedAt,
        },
    }
}

/// Condition matching rows where no list flag is set any more.
pub fn orphaned() -> Condition {
    Condition::all()
        .add(ColumnTrait::eq(&Column::IsWatchlist, false))
        .add(ColumnTrait::eq(&Column::IsFavorite, false))
        .add(ColumnTrait::eq(&Column::IsWatched, false))
}

impl Model {
    pub fn in_list(&self, kind: ListKind) -> bool {
        match kind {
            ListKind::Watchlist => self.is_watchlist,
            ListKind::Favorites => self.is_favorite,
            ListKind::Watched => self.is_watched,
        }
    }

    pub fn added_at(&self, kind: ListKind) -> Option<DateTimeUtc> {
        match kind {
            ListKind::Watchlist => self.watchlist_added_at,
            ListKind::Favorites => self.favorite_added_at,
            ListKind::Watched => self.watched_at,
        }
    }
}
