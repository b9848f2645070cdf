//! Allow/deny decisions for every guarded action.
//!
//! Each check takes an already-resolved [`Actor`] and target entity and
//! returns `Ok(())` or the reason for refusal. No check performs a lookup or
//! partially applies a request.

use thiserror::Error;

use super::{Actor, Project, Task, TaskChanges, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    View,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskAction<'a> {
    View,
    Update(&'a TaskChanges),
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Not authorized to update this project")]
    ProjectUpdate,
    #[error("Not authorized to delete this project")]
    ProjectDelete,
    #[error("Not authorized to update status")]
    TaskStatus,
    #[error("Not authorized to update task details")]
    TaskDetails,
    #[error("Not authorized to delete this task")]
    TaskDelete,
}

/// Which projects a project listing may return for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    All,
    ParticipatingIn(UserId),
}

impl ProjectScope {
    pub fn for_actor(actor: &Actor) -> Self {
        if actor.is_admin() {
            ProjectScope::All
        } else {
            ProjectScope::ParticipatingIn(actor.id)
        }
    }

    pub fn includes(&self, project: &Project) -> bool {
        match self {
            ProjectScope::All => true,
            ProjectScope::ParticipatingIn(user_id) => {
                project.is_participant(user_id)
            }
        }
    }
}

pub fn authorize_project(
    actor: &Actor,
    project: &Project,
    action: ProjectAction,
) -> Result<(), PolicyError> {
    let owns = actor.is_admin() || actor.is(&project.creator);
    match action {
        ProjectAction::View => Ok(()),
        ProjectAction::Update if owns => Ok(()),
        ProjectAction::Update => Err(PolicyError::ProjectUpdate),
        ProjectAction::Delete if owns => Ok(()),
        ProjectAction::Delete => Err(PolicyError::ProjectDelete),
    }
}

pub fn authorize_task(
    actor: &Actor,
    task: &Task,
    action: TaskAction<'_>,
) -> Result<(), PolicyError> {
    if actor.is_admin() {
        return Ok(());
    }

    match action {
        TaskAction::View => Ok(()),
        // A payload that touches anything besides status is admin-only as a
        // whole, even when the status part alone would be allowed.
        TaskAction::Update(changes) if changes.touches_restricted_fields() => {
            Err(PolicyError::TaskDetails)
        }
        TaskAction::Update(_) => match task.assigned_to {
            Some(assignee) if actor.is(&assignee) => Ok(()),
            _ => Err(PolicyError::TaskStatus),
        },
        TaskAction::Delete if actor.is(&task.created_by) => Ok(()),
        TaskAction::Delete => Err(PolicyError::TaskDelete),
    }
}
