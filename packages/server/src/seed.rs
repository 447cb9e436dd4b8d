use chrono::Utc;
use common::ListKind;
use sea_orm::sea_query::{Index, OnConflict, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{avatar, user_media};

/// Built-in avatar catalog: (avatar_id, name, url, is_default).
const AVATAR_CATALOG: &[(i32, &str, &str, bool)] = &[
    (1, "Classic", "/avatars/classic.png", true),
    (2, "Popcorn", "/avatars/popcorn.png", false),
    (3, "Clapperboard", "/avatars/clapperboard.png", false),
    (4, "Film Reel", "/avatars/film-reel.png", false),
    (5, "Robot", "/avatars/robot.png", false),
    (6, "Astronaut", "/avatars/astronaut.png", false),
    (7, "Detective", "/avatars/detective.png", false),
    (8, "Ghost", "/avatars/ghost.png", false),
];

/// Name of the unique index backing the `(user_id, media_id)` upsert.
pub const USER_MEDIA_KEY_INDEX: &str = "uq_user_media_user_media";

/// Seed the `avatars` catalog. Existing rows are left untouched.
pub async fn seed_avatar_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = Utc::now();
    let mut inserted = 0u32;

    for &(avatar_id, name, url, is_default) in AVATAR_CATALOG {
        let model = avatar::ActiveModel {
            avatar_id: Set(avatar_id),
            avatar_name: Set(name.to_string()),
            avatar_url: Set(url.to_string()),
            is_default: Set(is_default),
            created_at: Set(now),
        };

        let result = avatar::Entity::insert(model)
            .on_conflict(
                OnConflict::column(avatar::Column::AvatarId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(0) | Err(DbErr::RecordNotInserted) => {}
            Ok(_) => inserted += 1,
            Err(e) => return Err(e),
        }
    }

    if inserted > 0 {
        info!("Seeded {} new avatars", inserted);
    }

    Ok(())
}

/// Ensure required database indexes exist.
///
/// The unique `(user_id, media_id)` index is what the media list upsert
/// conflicts on, so failing to create it is fatal. The per-list ordering
/// indexes are only a performance concern.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name(USER_MEDIA_KEY_INDEX)
        .table(user_media::Entity)
        .col(user_media::Column::UserId)
        .col(user_media::Column::MediaId)
        .to_string(PostgresQueryBuilder);
    db.execute_unprepared(&stmt).await?;
    info!("Ensured index {} exists", USER_MEDIA_KEY_INDEX);

    // One index per list for: WHERE user_id = ? AND <flag> ORDER BY <added_at> DESC
    for kind in ListKind::ALL {
        let cols = user_media::list_columns(*kind);
        let name = format!("idx_user_media_{kind}_added");
        let stmt = Index::create()
            .if_not_exists()
            .name(&name)
            .table(user_media::Entity)
            .col(user_media::Column::UserId)
            .col(cols.added_at)
            .to_string(PostgresQueryBuilder);

        match db.execute_unprepared(&stmt).await {
            Ok(_) => {
                info!("Ensured index {} exists", name);
            }
            Err(e) => {
                tracing::warn!("Failed to create index {}: {}", name, e);
            }
        }
    }

    Ok(())
}
