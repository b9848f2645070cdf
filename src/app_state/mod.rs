use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{BannedTokenStore, ProjectStore, TaskStore, UserStore};

pub type UserStoreType = Arc<RwLock<dyn UserStore + Send + Sync>>;
pub type BannedTokenStoreType = Arc<RwLock<dyn BannedTokenStore + Send + Sync>>;
pub type ProjectStoreType = Arc<RwLock<dyn ProjectStore + Send + Sync>>;
pub type TaskStoreType = Arc<RwLock<dyn TaskStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub banned_token_store: BannedTokenStoreType,
    pub project_store: ProjectStoreType,
    pub task_store: TaskStoreType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        banned_token_store: BannedTokenStoreType,
        project_store: ProjectStoreType,
        task_store: TaskStoreType,
    ) -> Self {
        Self {
            user_store,
            banned_token_store,
            project_store,
            task_store,
        }
    }

    /// Fresh in-memory stores, used by tests and `STORE_BACKEND=memory`.
    pub fn in_memory() -> Self {
        use crate::services::data_stores::{
            HashmapProjectStore, HashmapTaskStore, HashmapUserStore,
            HashsetBannedTokenStore,
        };

        Self::new(
            Arc::new(RwLock::new(HashmapUserStore::default())),
            Arc::new(RwLock::new(HashsetBannedTokenStore::default())),
            Arc::new(RwLock::new(HashmapProjectStore::default())),
            Arc::new(RwLock::new(HashmapTaskStore::default())),
        )
    }
}
