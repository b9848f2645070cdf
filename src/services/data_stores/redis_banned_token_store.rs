use color_eyre::eyre::{eyre, Result, WrapErr};
use redis::{Commands, Connection};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{BannedTokenStore, BannedTokenStoreError},
    utils::auth::SESSION_TTL_SECONDS,
};

/// Revoked session tokens in Redis. Each entry expires together with the
/// token it revokes, so the keyspace never outgrows the live sessions.
pub struct RedisBannedTokenStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisBannedTokenStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl BannedTokenStore for RedisBannedTokenStore {
    #[tracing::instrument(name = "Revoking session in Redis", skip_all)]
    async fn add_token(&mut self, token: &Secret<String>) -> Result<()> {
        let ttl: u64 = SESSION_TTL_SECONDS
            .try_into()
            .wrap_err("session TTL does not fit in u64")?;

        self.conn
            .write()
            .await
            .set_ex::<_, _, ()>(revoked_key(token), true, ttl)
            .wrap_err("failed to store revoked session in Redis")?;

        Ok(())
    }

    #[tracing::instrument(name = "Checking Redis for revoked session", skip_all)]
    async fn check_token(
        &self,
        token: &Secret<String>,
    ) -> Result<(), BannedTokenStoreError> {
        let revoked: bool = self
            .conn
            .write()
            .await
            .exists(revoked_key(token))
            .map_err(|e| {
                BannedTokenStoreError::UnexpectedError(
                    eyre!(e).wrap_err("failed to look up session in Redis"),
                )
            })?;

        match revoked {
            true => Err(BannedTokenStoreError::BannedToken),
            false => Ok(()),
        }
    }
}

const REVOKED_SESSION_KEY_PREFIX: &str = "taskify:revoked_session:";

fn revoked_key(token: &Secret<String>) -> String {
    format!("{REVOKED_SESSION_KEY_PREFIX}{}", token.expose_secret())
}
