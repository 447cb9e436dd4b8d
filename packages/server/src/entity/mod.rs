pub mod avatar;
pub mod user_avatar;
pub mod user_media;
