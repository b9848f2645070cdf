mod hashmap_project_store;
mod hashmap_task_store;
mod hashmap_user_store;
mod hashset_banned_token_store;
mod postgres_project_store;
mod postgres_task_store;
mod postgres_user_store;
mod redis_banned_token_store;

pub use hashmap_project_store::*;
pub use hashmap_task_store::*;
pub use hashmap_user_store::*;
pub use hashset_banned_token_store::*;
pub use postgres_project_store::*;
pub use postgres_task_store::*;
pub use postgres_user_store::*;
pub use redis_banned_token_store::*;
