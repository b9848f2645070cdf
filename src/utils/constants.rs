use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref JWT_SECRET: Secret<String> = set_token();
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
    pub static ref REDIS_HOST_NAME: String =
        load_or_default(env::REDIS_HOST_NAME_ENV_VAR, DEFAULT_REDIS_HOSTNAME);
    pub static ref ALLOWED_ORIGINS: Vec<String> = set_allowed_origins();
    pub static ref STORE_BACKEND: StoreBackend = set_store_backend();
    pub static ref ADMIN_SEED: Option<AdminSeed> = set_admin_seed();
}

/// Where users, projects and tasks are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL for entities, Redis for revoked sessions.
    Postgres,
    /// Process-local maps. Everything is lost on restart.
    Memory,
}

/// Credentials for the administrator created at startup.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
}

fn load_env() {
    dotenv().ok();
}

fn set_token() -> Secret<String> {
    load_env();
    let secret =
        std_env::var(env::JWT_SECRET_ENV_VAR).expect("JWT_SECRET must be set.");
    if secret.is_empty() {
        panic!("JWT_SECRET must not be empty.");
    }
    Secret::new(secret)
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url = std_env::var(env::DATABASE_URL_ENV_VAR)
        .expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

fn set_allowed_origins() -> Vec<String> {
    parse_origins(&load_or_default(
        env::ALLOWED_ORIGINS_ENV_VAR,
        DEFAULT_ALLOWED_ORIGINS,
    ))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

fn set_store_backend() -> StoreBackend {
    match load_or_default(env::STORE_BACKEND_ENV_VAR, "postgres")
        .to_lowercase()
        .as_str()
    {
        "memory" => StoreBackend::Memory,
        "postgres" => StoreBackend::Postgres,
        other => panic!("STORE_BACKEND must be postgres or memory, got {other}"),
    }
}

fn set_admin_seed() -> Option<AdminSeed> {
    load_env();
    let email = std_env::var(env::ADMIN_EMAIL_ENV_VAR).ok()?;
    let password = std_env::var(env::ADMIN_PASSWORD_ENV_VAR).ok()?;
    if email.is_empty() || password.is_empty() {
        return None;
    }

    Some(AdminSeed {
        username: load_or_default(env::ADMIN_USERNAME_ENV_VAR, "admin"),
        email,
        password: Secret::new(password),
    })
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => value,
        _ => String::from(default_value),
    }
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const STORE_BACKEND_ENV_VAR: &str = "STORE_BACKEND";
    pub const ADMIN_USERNAME_ENV_VAR: &str = "ADMIN_USERNAME";
    pub const ADMIN_EMAIL_ENV_VAR: &str = "ADMIN_EMAIL";
    pub const ADMIN_PASSWORD_ENV_VAR: &str = "ADMIN_PASSWORD";
}

pub const JWT_COOKIE_NAME: &str = "jwt";
pub const DEFAULT_REDIS_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:5174";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5001";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
