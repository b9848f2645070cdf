pub mod auth;
pub mod projects;
pub mod tasks;
mod views;

pub use views::*;
