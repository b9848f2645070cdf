use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Email, Role, UserId, UserPasswordHash, Username};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub role: Role,
    pub hash: UserPasswordHash,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: Username,
        email: Email,
        hash: UserPasswordHash,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::default(),
            username,
            email,
            role,
            hash,
            created_at: Utc::now(),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// The public face of a user: everything except the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// A user reference resolved for embedding in project and task views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
}
