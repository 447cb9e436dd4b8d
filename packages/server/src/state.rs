use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::store::{AvatarAssignmentStore, MediaListStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub media_lists: MediaListStore,
    pub avatars: AvatarAssignmentStore,
}

impl AppState {
    /// Wire both stores to the shared pool.
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            media_lists: MediaListStore::new(db.clone()),
            avatars: AvatarAssignmentStore::new(db.clone()),
            db,
            config,
        }
    }
}
