use serde::Serialize;

use crate::domain::UserProfile;

mod list_users;
mod login;
mod logout;
mod me;
mod register;

pub use list_users::list_users;
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;

/// Body returned by a successful register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserProfile,
}
