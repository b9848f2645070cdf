use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Report, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Project, ProjectId, ProjectName, ProjectScope, ProjectStore,
    ProjectStoreError, UserId,
};

pub struct PostgresProjectStore {
    pool: PgPool,
}

impl PostgresProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    description: String,
    creator_id: Uuid,
    members: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = Report;

    fn try_from(row: ProjectRow) -> Result<Self> {
        Ok(Project {
            id: ProjectId::new(row.id),
            name: ProjectName::parse(&row.name)?,
            description: row.description,
            creator: UserId::new(row.creator_id),
            members: row.members.into_iter().map(UserId::new).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn member_uuids(project: &Project) -> Vec<Uuid> {
    project.members.iter().map(|id| *id.as_ref()).collect()
}

fn into_projects(
    rows: Vec<ProjectRow>,
) -> Result<Vec<Project>, ProjectStoreError> {
    rows.into_iter()
        .map(|row| {
            Project::try_from(row).map_err(ProjectStoreError::UnexpectedError)
        })
        .collect()
}

#[async_trait::async_trait]
impl ProjectStore for PostgresProjectStore {
    #[tracing::instrument(name = "Adding project to PostgreSQL", skip_all)]
    async fn add_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, creator_id, members, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*project.id.as_ref())
        .bind(project.name.as_ref())
        .bind(&project.description)
        .bind(*project.creator.as_ref())
        .bind(member_uuids(&project))
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ProjectStoreError::ProjectIDExists
            }
            err => ProjectStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting project from PostgreSQL", skip_all)]
    async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        let row: ProjectRow = sqlx::query_as(
            r#"
            SELECT id, name, description, creator_id, members, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(*id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => ProjectStoreError::ProjectIDNotFound,
            err => ProjectStoreError::UnexpectedError(eyre!(err)),
        })?;

        row.try_into().map_err(ProjectStoreError::UnexpectedError)
    }

    #[tracing::instrument(
        name = "Getting project list from PostgreSQL",
        skip_all
    )]
    async fn list_projects(
        &self,
        scope: &ProjectScope,
    ) -> Result<Vec<Project>, ProjectStoreError> {
        let rows: Vec<ProjectRow> = match scope {
            ProjectScope::All => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, description, creator_id, members, created_at, updated_at
                    FROM projects
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
            ProjectScope::ParticipatingIn(user_id) => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, description, creator_id, members, created_at, updated_at
                    FROM projects
                    WHERE creator_id = $1 OR $1 = ANY(members)
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(*user_id.as_ref())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        into_projects(rows)
    }

    #[tracing::instrument(name = "Updating project in PostgreSQL", skip_all)]
    async fn update_project(
        &mut self,
        project: &Project,
    ) -> Result<(), ProjectStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $2, description = $3, members = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(*project.id.as_ref())
        .bind(project.name.as_ref())
        .bind(&project.description)
        .bind(member_uuids(project))
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::ProjectIDNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Deleting project from PostgreSQL", skip_all)]
    async fn delete_project(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(*id.as_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::ProjectIDNotFound);
        }
        Ok(())
    }
}
