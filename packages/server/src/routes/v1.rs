use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/users", user_routes())
        .nest("/avatars", avatar_routes())
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::media_list::list_media,
            handlers::media_list::add_media,
            handlers::media_list::clear_list
        ))
        .routes(routes!(handlers::media_list::remove_media))
        .routes(routes!(
            handlers::avatar::get_user_avatar,
            handlers::avatar::set_user_avatar
        ))
}

fn avatar_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::avatar::list_avatars))
}
