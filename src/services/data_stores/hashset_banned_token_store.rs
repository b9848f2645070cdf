use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use std::collections::HashSet;

use crate::domain::{BannedTokenStore, BannedTokenStoreError};

/// Revoked session tokens, kept until the process exits.
#[derive(Default)]
pub struct HashsetBannedTokenStore {
    revoked: HashSet<String>,
}

#[async_trait::async_trait]
impl BannedTokenStore for HashsetBannedTokenStore {
    async fn add_token(&mut self, token: &Secret<String>) -> Result<()> {
        self.revoked.insert(token.expose_secret().to_owned());
        Ok(())
    }

    async fn check_token(
        &self,
        token: &Secret<String>,
    ) -> Result<(), BannedTokenStoreError> {
        match self.revoked.contains(token.expose_secret()) {
            true => Err(BannedTokenStoreError::BannedToken),
            false => Ok(()),
        }
    }
}
