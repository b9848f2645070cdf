pub mod auth;
pub mod constants;
pub mod seed;
pub mod tracing;
