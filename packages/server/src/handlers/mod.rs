pub mod avatar;
pub mod health;
pub mod media_list;
