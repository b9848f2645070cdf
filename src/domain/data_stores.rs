use super::{
    Email, Password, Project, ProjectId, ProjectScope, Task, TaskId, User,
    UserId,
};
use color_eyre::eyre::{Report, Result};
use secrecy::Secret;
use thiserror::Error;

#[async_trait::async_trait]
pub trait UserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn get_user_by_email(
        &self,
        email: &Email,
    ) -> Result<User, UserStoreError>;
    /// Returns the user owning `email` if `password` matches their hash.
    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait BannedTokenStore {
    async fn add_token(&mut self, token: &Secret<String>) -> Result<()>;
    async fn check_token(
        &self,
        token: &Secret<String>,
    ) -> Result<(), BannedTokenStoreError>;
}

#[derive(Debug, Error)]
pub enum BannedTokenStoreError {
    #[error("Token is banned")]
    BannedToken,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for BannedTokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::BannedToken, Self::BannedToken)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait ProjectStore {
    async fn add_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError>;
    async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<Project, ProjectStoreError>;
    /// Projects visible under `scope`, newest first.
    async fn list_projects(
        &self,
        scope: &ProjectScope,
    ) -> Result<Vec<Project>, ProjectStoreError>;
    async fn update_project(
        &mut self,
        project: &Project,
    ) -> Result<(), ProjectStoreError>;
    async fn delete_project(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError>;
}

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Project ID exists")]
    ProjectIDExists,
    #[error("Project ID not found")]
    ProjectIDNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ProjectStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ProjectIDExists, Self::ProjectIDExists)
                | (Self::ProjectIDNotFound, Self::ProjectIDNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait TaskStore {
    async fn add_task(&mut self, task: Task) -> Result<(), TaskStoreError>;
    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskStoreError>;
    /// Every task, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskStoreError>;
    /// Tasks belonging to `project`, newest first.
    async fn list_tasks_for_project(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<Task>, TaskStoreError>;
    async fn update_task(&mut self, task: &Task) -> Result<(), TaskStoreError>;
    async fn delete_task(&mut self, id: &TaskId) -> Result<(), TaskStoreError>;
    async fn delete_tasks_for_project(
        &mut self,
        project: &ProjectId,
    ) -> Result<(), TaskStoreError>;
}

#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("Task ID exists")]
    TaskIDExists,
    #[error("Task ID not found")]
    TaskIDNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for TaskStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::TaskIDExists, Self::TaskIDExists)
                | (Self::TaskIDNotFound, Self::TaskIDNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
