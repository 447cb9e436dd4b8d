use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_avatars")]
pub struct Model {
    /// One assignment per user; the upsert conflicts on this key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,

    pub avatar_id: i32,
    #[sea_orm(belongs_to, from = "avatar_id", to = "avatar_id")]
    pub avatar: HasOne<super::avatar::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
