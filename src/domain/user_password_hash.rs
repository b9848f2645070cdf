use super::Password;
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash,
    PasswordHasher, PasswordVerifier, Version,
};
use color_eyre::eyre::{Result, WrapErr};
use secrecy::{ExposeSecret, Secret};

/// An argon2id PHC string. Never serialized into API responses.
#[derive(Debug, Clone)]
pub struct UserPasswordHash(Secret<String>);

impl PartialEq for UserPasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl UserPasswordHash {
    /// Wraps a hash loaded from storage, rejecting anything that is not a
    /// well-formed PHC string.
    pub fn parse(s: Secret<String>) -> Result<Self> {
        PasswordHash::new(s.expose_secret())
            .wrap_err("failed to parse password hash")?;
        Ok(Self(s))
    }

    #[tracing::instrument(name = "Computing password hash", skip_all)]
    pub async fn from_password(password: &Password) -> Result<Self> {
        let password = password.as_ref().clone();
        let current_span = tracing::Span::current();

        let hash = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| -> Result<String> {
                let salt = SaltString::generate(&mut rand::thread_rng());
                let hash = Argon2::new(
                    Algorithm::Argon2id,
                    Version::V0x13,
                    Params::new(15000, 2, 1, None)?,
                )
                .hash_password(password.expose_secret().as_bytes(), &salt)?
                .to_string();
                Ok(hash)
            })
        })
        .await??;

        Ok(Self(Secret::new(hash)))
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    pub async fn verify(&self, candidate: &Password) -> Result<()> {
        let expected = self.0.clone();
        let candidate = candidate.as_ref().clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = PasswordHash::new(expected.expose_secret())?;
                Argon2::default()
                    .verify_password(
                        candidate.expose_secret().as_bytes(),
                        &expected,
                    )
                    .wrap_err("failed to verify password hash")
            })
        })
        .await?
    }
}

impl AsRef<Secret<String>> for UserPasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
