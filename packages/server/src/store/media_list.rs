use chrono::{DateTime, Utc};
use common::{ListKind, MediaType};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use super::{StoreError, run_in_transaction};
use crate::entity::user_media::{self, list_columns, orphaned};
use crate::models::media_list::MediaListEntry;

/// Watchlist, favorites and watched, stored as flags on one row per (user, media).
#[derive(Clone)]
pub struct MediaListStore {
    db: DatabaseConnection,
}

impl MediaListStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Entries on `kind` for the user, most recently added first.
    pub async fn list(
        &self,
        user_id: i32,
        kind: ListKind,
    ) -> Result<Vec<MediaListEntry>, StoreError> {
        let cols = list_columns(kind);
        let rows = user_media::Entity::find()
            .filter(ColumnTrait::eq(&user_media::Column::UserId, user_id))
            .filter(ColumnTrait::eq(&cols.flag, true))
            .order_by_desc(cols.added_at)
            .order_by_desc(user_media::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|row| project(row, kind))
            .collect()
    }

    /// Put the item on `kind`, creating the row on first use.
    ///
    /// Re-adding refreshes the list timestamp. Other lists' flags and the
    /// stored media type of an existing row are left as they are.
    pub async fn add(
        &self,
        user_id: i32,
        media_id: &str,
        media_type: MediaType,
        kind: ListKind,
    ) -> Result<MediaListEntry, StoreError> {
        let now = Utc::now();
        let cols = list_columns(kind);

        let mut model = user_media::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            media_id: Set(media_id.to_owned()),
            media_type: Set(media_type),
            is_watchlist: Set(false),
            is_favorite: Set(false),
            is_watched: Set(false),
            watchlist_added_at: Set(None),
            favorite_added_at: Set(None),
            watched_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        model.set(cols.flag, true.into());
        model.set(cols.added_at, Some(now).into());

        let row = user_media::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([user_media::Column::UserId, user_media::Column::MediaId])
                    .update_columns([cols.flag, cols.added_at, user_media::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        project(row, kind)
    }

    /// Take the item off `kind`, deleting the row if no list references it any more.
    ///
    /// Removing something that is not on the list is a no-op.
    pub async fn remove(
        &self,
        user_id: i32,
        media_id: &str,
        kind: ListKind,
    ) -> Result<(), StoreError> {
        let media_id = media_id.to_owned();
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let scope = Condition::all()
                    .add(ColumnTrait::eq(&user_media::Column::UserId, user_id))
                    .add(ColumnTrait::eq(&user_media::Column::MediaId, media_id));
                clear_flag(txn, kind, scope.clone()).await?;
                delete_orphans(txn, scope).await?;
                Ok(())
            })
        })
        .await
    }

    /// Empty `kind` for the user, deleting rows left without any list.
    pub async fn remove_all(&self, user_id: i32, kind: ListKind) -> Result<(), StoreError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let scope = Condition::all().add(ColumnTrait::eq(&user_media::Column::UserId, user_id));
                clear_flag(txn, kind, scope.clone()).await?;
                delete_orphans(txn, scope).await?;
                Ok(())
            })
        })
        .await
    }

    /// The full row for a (user, media) pair, regardless of which lists it is on.
    pub async fn find_entry(
        &self,
        user_id: i32,
        media_id: &str,
    ) -> Result<Option<user_media::Model>, StoreError> {
        let row = user_media::Entity::find()
            .filter(ColumnTrait::eq(&user_media::Column::UserId, user_id))
            .filter(ColumnTrait::eq(&user_media::Column::MediaId, media_id))
            .one(&self.db)
            .await?;
        Ok(row)
    }
}

fn project(row: user_media::Model, kind: ListKind) -> Result<MediaListEntry, StoreError> {
    let id = row.id;
    if !row.in_list(kind) {
        return Err(StoreError::ConstraintViolation(format!(
            "user_media row {id} was returned for {kind} but its {kind} flag is not set"
        )));
    }
    MediaListEntry::project(row, kind).ok_or_else(|| {
        StoreError::ConstraintViolation(format!(
            "user_media row {id} has {kind} flag without its timestamp"
        ))
    })
}

/// Clear `kind` on the rows in `scope` that currently have it set.
async fn clear_flag<C: ConnectionTrait>(
    db: &C,
    kind: ListKind,
    scope: Condition,
) -> Result<u64, DbErr> {
    let cols = list_columns(kind);
    let result = user_media::Entity::update_many()
        .col_expr(cols.flag, Expr::value(false))
        .col_expr(cols.added_at, Expr::value(Option::<DateTime<Utc>>::None))
        .col_expr(user_media::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(scope)
        .filter(ColumnTrait::eq(&cols.flag, true))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Delete the rows in `scope` that no longer belong to any list.
async fn delete_orphans<C: ConnectionTrait>(db: &C, scope: Condition) -> Result<u64, DbErr> {
    let result = user_media::Entity::delete_many()
        .filter(scope)
        .filter(orphaned())
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
