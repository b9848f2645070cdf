mod actor;
mod assignment;
mod data_stores;
mod email;
mod error;
mod password;
mod policy;
mod project;
mod project_name;
mod role;
mod task;
mod task_status;
mod user;
mod user_id;
mod user_password_hash;
mod username;

pub use actor::*;
pub use assignment::*;
pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use password::*;
pub use policy::*;
pub use project::*;
pub use project_name::*;
pub use role::*;
pub use task::*;
pub use task_status::*;
pub use user::*;
pub use user_id::*;
pub use user_password_hash::*;
pub use username::*;
