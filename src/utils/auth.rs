use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use color_eyre::eyre::{eyre, Context, ContextCompat, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    app_state::BannedTokenStoreType,
    domain::{Actor, AuthAPIError, BannedTokenStoreError, Role, User, UserId},
};

use super::constants::{JWT_COOKIE_NAME, JWT_SECRET};

/// How long a session token stays valid after login.
pub const SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    pub fn actor(&self) -> Result<Actor, AuthAPIError> {
        let id = UserId::parse(&self.sub)
            .map_err(|_| AuthAPIError::InvalidToken)?;
        Ok(Actor::new(id, self.role))
    }
}

#[tracing::instrument(name = "Generating auth cookie", skip_all)]
pub fn generate_auth_cookie(user: &User) -> Result<Cookie<'static>> {
    let token = generate_auth_token(&user.id, user.role)?;
    Ok(create_auth_cookie(token))
}

fn create_auth_cookie(token: Secret<String>) -> Cookie<'static> {
    Cookie::build((JWT_COOKIE_NAME, token.expose_secret().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// A cookie that, once added to a jar, tells the browser to forget the
/// session. Path must match the one the session was issued with.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(JWT_COOKIE_NAME).path("/").build()
}

#[tracing::instrument(name = "Generating auth token", skip_all)]
fn generate_auth_token(id: &UserId, role: Role) -> Result<Secret<String>> {
    let delta = chrono::Duration::try_seconds(SESSION_TTL_SECONDS)
        .wrap_err("failed to create session time delta")?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(eyre!("failed to add to current time"))?
        .timestamp();

    let exp: usize = exp.try_into().wrap_err(format!(
        "failed to cast exp time to usize. exp time: {}",
        exp
    ))?;

    let claims = Claims {
        sub: id.to_string(),
        role,
        exp,
    };

    create_token(&claims)
}

fn create_token(claims: &Claims) -> Result<Secret<String>> {
    let token_string = encode(
        &jsonwebtoken::Header::default(),
        claims,
        &EncodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
    )
    .wrap_err("failed to create token")?;

    Ok(Secret::new(token_string))
}

/// Decodes `token` after making sure it has not been revoked by a logout.
#[tracing::instrument(name = "Validating auth token", skip_all)]
pub async fn validate_token(
    token: &Secret<String>,
    banned_token_store: &BannedTokenStoreType,
) -> Result<Claims, AuthAPIError> {
    banned_token_store
        .read()
        .await
        .check_token(token)
        .await
        .map_err(|e| match e {
            BannedTokenStoreError::BannedToken => AuthAPIError::InvalidToken,
            BannedTokenStoreError::UnexpectedError(report) => {
                AuthAPIError::UnexpectedError(report)
            }
        })?;

    decode::<Claims>(
        token.expose_secret(),
        &DecodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthAPIError::InvalidToken)
}

pub fn session_token(jar: &CookieJar) -> Result<Secret<String>, AuthAPIError> {
    jar.get(JWT_COOKIE_NAME)
        .map(|cookie| Secret::new(cookie.value().to_owned()))
        .ok_or(AuthAPIError::MissingToken)
}

/// Resolves the caller of a request from its session cookie.
#[tracing::instrument(name = "Resolving request actor", skip_all)]
pub async fn get_actor(
    jar: &CookieJar,
    banned_token_store: &BannedTokenStoreType,
) -> Result<Actor, AuthAPIError> {
    let token = session_token(jar)?;
    validate_token(&token, banned_token_store).await?.actor()
}
