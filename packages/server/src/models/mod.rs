pub mod avatar;
pub mod media_list;
pub mod shared;
