use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A selectable profile picture. Seeded at startup and never mutated by the API.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avatars")]
pub struct Model {
    /// Stable catalog identity, assigned by the seed data.
    #[sea_orm(primary_key, auto_increment = false)]
    pub avatar_id: i32,

    pub avatar_name: String,
    pub avatar_url: String,

    /// Exactly one catalog row is expected to carry this flag.
    pub is_default: bool,

    #[sea_orm(has_many)]
    pub assignments: HasMany<super::user_avatar::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
