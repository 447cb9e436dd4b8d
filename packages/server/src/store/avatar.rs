use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use super::{StoreError, run_in_transaction};
use crate::entity::{avatar, user_avatar};
use crate::models::avatar::AvatarOption;

/// The avatar catalog and each user's current choice from it.
#[derive(Clone)]
pub struct AvatarAssignmentStore {
    db: DatabaseConnection,
}

impl AvatarAssignmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All catalog entries by ascending id.
    pub async fn list_catalog(&self) -> Result<Vec<AvatarOption>, StoreError> {
        let avatars = avatar::Entity::find()
            .order_by_asc(avatar::Column::AvatarId)
            .all(&self.db)
            .await?;
        Ok(avatars.into_iter().map(AvatarOption::from).collect())
    }

    /// The user's chosen avatar, or the catalog default if they never chose one.
    pub async fn get_assignment(&self, user_id: i32) -> Result<AvatarOption, StoreError> {
        if let Some(model) = assigned_avatar(&self.db, user_id).await? {
            return Ok(model.into());
        }

        let fallback = avatar::Entity::find()
            .filter(avatar::Column::IsDefault.eq(true))
            .order_by_asc(avatar::Column::AvatarId)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                StoreError::NotFound(format!(
                    "No avatar assigned to user {user_id} and no default avatar in catalog"
                ))
            })?;
        Ok(fallback.into())
    }

    /// Point the user's assignment at `avatar_id`, which must exist in the catalog.
    ///
    /// The existence check, the upsert and the read-back share one transaction.
    pub async fn set_assignment(
        &self,
        user_id: i32,
        avatar_id: i32,
    ) -> Result<AvatarOption, StoreError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                if avatar::Entity::find_by_id(avatar_id).one(txn).await?.is_none() {
                    return Err(StoreError::NotFound(format!(
                        "Avatar {avatar_id} not found"
                    )));
                }

                let now = Utc::now();
                let assignment = user_avatar::ActiveModel {
                    user_id: Set(user_id),
                    avatar_id: Set(avatar_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                user_avatar::Entity::insert(assignment)
                    .on_conflict(
                        OnConflict::column(user_avatar::Column::UserId)
                            .update_columns([
                                user_avatar::Column::AvatarId,
                                user_avatar::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec_without_returning(txn)
                    .await?;

                let assigned = assigned_avatar(txn, user_id).await?.ok_or_else(|| {
                    StoreError::NotFound(format!("Avatar {avatar_id} not found"))
                })?;
                Ok(assigned.into())
            })
        })
        .await
    }
}

/// Catalog row the user's assignment points at, if any.
async fn assigned_avatar<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Option<avatar::Model>, DbErr> {
    avatar::Entity::find()
        .inner_join(user_avatar::Entity)
        .filter(user_avatar::Column::UserId.eq(user_id))
        .one(db)
        .await
}
