use crate::error::AppError;

/// Longest accepted external media id.
pub const MAX_MEDIA_ID_LEN: usize = 64;

/// Validate a user id taken from the path (must be > 0).
pub fn validate_user_id(user_id: i32) -> Result<(), AppError> {
    if user_id <= 0 {
        return Err(AppError::Validation("User ID must be a positive integer".into()));
    }
    Ok(())
}

/// Validate and normalize an external media id (1-64 characters after trimming).
pub fn validate_media_id(media_id: &str) -> Result<String, AppError> {
    let media_id = media_id.trim();
    if media_id.is_empty() || media_id.chars().count() > MAX_MEDIA_ID_LEN {
        return Err(AppError::Validation(format!(
            "Media ID must be 1-{MAX_MEDIA_ID_LEN} characters"
        )));
    }
    Ok(media_id.to_string())
}

/// Validate an avatar id (must be > 0).
pub fn validate_avatar_id(avatar_id: i32) -> Result<(), AppError> {
    if avatar_id <= 0 {
        return Err(AppError::Validation(
            "Avatar ID must be a positive integer".into(),
        ));
    }
    Ok(())
}
