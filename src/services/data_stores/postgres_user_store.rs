use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Report, Result};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Email, Password, User, UserId, UserPasswordHash, UserStore,
    UserStoreError, Username,
};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = Report;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            id: UserId::new(row.id),
            username: Username::parse(&row.username)?,
            email: Email::parse(&row.email)?,
            role: row.role.parse()?,
            hash: UserPasswordHash::parse(Secret::new(row.password_hash))?,
            created_at: row.created_at,
        })
    }
}

const SELECT_USER: &str = r#"
    SELECT id, username, email, role, password_hash, created_at
    FROM users
"#;

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, role, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*user.id.as_ref())
        .bind(user.username.as_ref())
        .bind(user.email.as_ref())
        .bind(user.role.as_str())
        .bind(user.hash.as_ref().expose_secret())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by ID from PostgreSQL", skip_all)]
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let row: UserRow =
            sqlx::query_as(&format!("{SELECT_USER} WHERE id = $1"))
                .bind(*id.as_ref())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
                    err => UserStoreError::UnexpectedError(eyre!(err)),
                })?;

        row.try_into().map_err(UserStoreError::UnexpectedError)
    }

    #[tracing::instrument(
        name = "Retrieving user by email from PostgreSQL",
        skip_all
    )]
    async fn get_user_by_email(
        &self,
        email: &Email,
    ) -> Result<User, UserStoreError> {
        let row: UserRow =
            sqlx::query_as(&format!("{SELECT_USER} WHERE email = $1"))
                .bind(email.as_ref())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
                    err => UserStoreError::UnexpectedError(eyre!(err)),
                })?;

        row.try_into().map_err(UserStoreError::UnexpectedError)
    }

    #[tracing::instrument(
        name = "Validating user credentials in PostgreSQL",
        skip_all
    )]
    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = self.get_user_by_email(email).await?;
        user.hash
            .verify(password)
            .await
            .map_err(|_| UserStoreError::InvalidCredentials)?;
        Ok(user)
    }

    #[tracing::instrument(name = "Listing users from PostgreSQL", skip_all)]
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("{SELECT_USER} ORDER BY created_at"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        rows.into_iter()
            .map(|row| {
                User::try_from(row).map_err(UserStoreError::UnexpectedError)
            })
            .collect()
    }
}
