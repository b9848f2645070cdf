use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{
    ProjectId, TaskPriority, TaskStatus, TaskTitle, UserId, ValidationError,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|e| {
            ValidationError::new(format!("Invalid task ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project: ProjectId,
    /// `None` means unassigned.
    pub assigned_to: Option<UserId>,
    pub created_by: UserId,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to create a task besides its creator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: TaskTitle,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project: ProjectId,
    pub assigned_to: Option<UserId>,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(new_task: NewTask, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::default(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            priority: new_task.priority,
            project: new_task.project,
            assigned_to: new_task.assigned_to,
            created_by,
            due_date: new_task.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(assigned_to) = changes.assigned_to {
            self.assigned_to = Some(assigned_to);
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = Some(due_date);
        }
        self.updated_at = Utc::now();
    }
}

/// A partial task update. A field is "present" when it is `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<TaskTitle>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<UserId>,
    pub due_date: Option<NaiveDate>,
}

impl TaskChanges {
    /// True when any field other than `status` is present.
    pub fn touches_restricted_fields(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.assigned_to.is_some()
            || self.due_date.is_some()
    }
}

/// Accepts a bare calendar date or an RFC 3339 timestamp, keeping only the
/// date part of the latter.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::new(format!("Invalid due date: {s}")))
}
