use serde::{Deserialize, Serialize};

use crate::entity::avatar;

/// Request body for choosing an avatar.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SetAvatarRequest {
    /// ID of an avatar from the catalog.
    #[schema(example = 5)]
    pub avatar_id: i32,
}

/// One selectable avatar from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct AvatarOption {
    #[schema(example = 5)]
    pub avatar_id: i32,
    #[schema(example = "Robot")]
    pub avatar_name: String,
    #[schema(example = "/avatars/robot.png")]
    pub avatar_url: String,
    pub is_default: bool,
}

impl From<avatar::Model> for AvatarOption {
    fn from(model: avatar::Model) -> Self {
        Self {
            avatar_id: model.avatar_id,
            avatar_name: model.avatar_name,
            avatar_url: model.avatar_url,
            is_default: model.is_default,
        }
    }
}
