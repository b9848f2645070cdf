//! JSON shapes returned by the project and task handlers.
//!
//! Entities reference each other by id. Views replace those ids with short
//! summaries, fetched once per response and reused across list items.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::{
    app_state::AppState,
    domain::{
        Project, ProjectAPIError, ProjectId, ProjectName, ProjectStoreError,
        Task, TaskId,
        TaskPriority, TaskStatus, TaskTitle, UserId, UserSummary,
    },
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: String,
    pub creator: UserSummary,
    pub members: Vec<UserSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub id: ProjectId,
    pub name: ProjectName,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project: ProjectRef,
    pub assigned_to: Option<UserSummary>,
    pub created_by: UserSummary,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Memoizes the lookups needed to render views.
pub struct ViewBuilder<'a> {
    state: &'a AppState,
    users: HashMap<UserId, UserSummary>,
    projects: HashMap<ProjectId, ProjectRef>,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            users: HashMap::new(),
            projects: HashMap::new(),
        }
    }

    async fn user(
        &mut self,
        id: &UserId,
    ) -> Result<UserSummary, ProjectAPIError> {
        if let Some(summary) = self.users.get(id) {
            return Ok(summary.clone());
        }

        let summary = self
            .state
            .user_store
            .read()
            .await
            .get_user(id)
            .await
            .map_err(|e| {
                ProjectAPIError::UnexpectedError(
                    eyre!(e).wrap_err(format!("dangling user reference {id}")),
                )
            })?
            .summary();
        self.users.insert(*id, summary.clone());
        Ok(summary)
    }

    /// `None` when the project no longer exists, which happens to tasks
    /// left behind by a project delete.
    async fn project_ref(
        &mut self,
        id: &ProjectId,
    ) -> Result<Option<ProjectRef>, ProjectAPIError> {
        if let Some(project) = self.projects.get(id) {
            return Ok(Some(project.clone()));
        }

        let project = match self
            .state
            .project_store
            .read()
            .await
            .get_project(id)
            .await
        {
            Ok(project) => project,
            Err(ProjectStoreError::ProjectIDNotFound) => return Ok(None),
            Err(e) => return Err(ProjectAPIError::UnexpectedError(eyre!(e))),
        };
        let project_ref = ProjectRef {
            id: project.id,
            name: project.name,
        };
        self.projects.insert(*id, project_ref.clone());
        Ok(Some(project_ref))
    }

    pub async fn users(
        &mut self,
        ids: &[UserId],
    ) -> Result<Vec<UserSummary>, ProjectAPIError> {
        let mut summaries = Vec::with_capacity(ids.len());
        for id in ids {
            summaries.push(self.user(id).await?);
        }
        Ok(summaries)
    }

    pub async fn project(
        &mut self,
        project: Project,
    ) -> Result<ProjectView, ProjectAPIError> {
        let creator = self.user(&project.creator).await?;
        let member_ids: Vec<UserId> = project.members.iter().copied().collect();
        let members = self.users(&member_ids).await?;

        self.projects.insert(
            project.id,
            ProjectRef {
                id: project.id,
                name: project.name.clone(),
            },
        );

        Ok(ProjectView {
            id: project.id,
            name: project.name,
            description: project.description,
            creator,
            members,
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
    }

    pub async fn projects(
        &mut self,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectView>, ProjectAPIError> {
        let mut views = Vec::with_capacity(projects.len());
        for project in projects {
            views.push(self.project(project).await?);
        }
        Ok(views)
    }

    /// An orphaned task is reported as missing.
    pub async fn task(&mut self, task: Task) -> Result<TaskView, ProjectAPIError> {
        let task_id = *task.id.as_ref();
        self.task_view(task)
            .await?
            .ok_or(ProjectAPIError::IDNotFoundError(task_id))
    }

    async fn task_view(
        &mut self,
        task: Task,
    ) -> Result<Option<TaskView>, ProjectAPIError> {
        let Some(project) = self.project_ref(&task.project).await? else {
            return Ok(None);
        };
        let assigned_to = match &task.assigned_to {
            Some(id) => Some(self.user(id).await?),
            None => None,
        };
        let created_by = self.user(&task.created_by).await?;

        Ok(Some(TaskView {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            project,
            assigned_to,
            created_by,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }))
    }

    pub async fn tasks(
        &mut self,
        tasks: Vec<Task>,
    ) -> Result<Vec<TaskView>, ProjectAPIError> {
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            let (task_id, project_id) = (task.id, task.project);
            match self.task_view(task).await? {
                Some(view) => views.push(view),
                None => tracing::warn!(
                    "skipping task {task_id} of missing project {project_id}"
                ),
            }
        }
        Ok(views)
    }
}
