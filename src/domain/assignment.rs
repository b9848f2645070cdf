use thiserror::Error;

use super::{Project, ProjectId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("candidate is not creator or member of target project")]
pub struct AssignmentError {
    pub candidate: UserId,
    pub project: ProjectId,
}

/// A task may only be assigned to a participant of its project. Callers run
/// this whenever an assignee is supplied, even if it matches the current one.
pub fn validate_assignment(
    project: &Project,
    candidate: &UserId,
) -> Result<(), AssignmentError> {
    if project.is_participant(candidate) {
        Ok(())
    } else {
        Err(AssignmentError {
            candidate: *candidate,
            project: project.id,
        })
    }
}
