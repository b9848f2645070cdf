use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use super::{ProjectName, UserId, ValidationError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|e| {
            ValidationError::new(format!("Invalid project ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for ProjectId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A project, its creator, and its member set.
///
/// The creator is a participant whether or not they also appear in
/// `members`; nothing requires the two to be disjoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: String,
    pub creator: UserId,
    pub members: BTreeSet<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        name: ProjectName,
        description: String,
        creator: UserId,
        members: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::default(),
            name,
            description,
            creator,
            members: members.into_iter().collect(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_participant(&self, user_id: &UserId) -> bool {
        &self.creator == user_id || self.members.contains(user_id)
    }

    /// Creator first, then every member that is not the creator.
    pub fn effective_members(&self) -> Vec<UserId> {
        std::iter::once(self.creator)
            .chain(
                self.members
                    .iter()
                    .copied()
                    .filter(|member| member != &self.creator),
            )
            .collect()
    }

    pub fn apply(&mut self, changes: ProjectChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(members) = changes.members {
            self.members = members;
        }
        self.updated_at = Utc::now();
    }
}

/// A partial project update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub name: Option<ProjectName>,
    pub description: Option<String>,
    pub members: Option<BTreeSet<UserId>>,
}
