use chrono::{DateTime, NaiveDate, Utc};
use color_eyre::eyre::{eyre, Report, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    ProjectId, Task, TaskId, TaskStore, TaskStoreError, TaskTitle, UserId,
};

pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: String,
    status: String,
    priority: String,
    project_id: Uuid,
    assigned_to: Option<Uuid>,
    created_by: Uuid,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = Report;

    fn try_from(row: TaskRow) -> Result<Self> {
        Ok(Task {
            id: TaskId::new(row.id),
            title: TaskTitle::parse(&row.title)?,
            description: row.description,
            status: row.status.parse()?,
            priority: row.priority.parse()?,
            project: ProjectId::new(row.project_id),
            assigned_to: row.assigned_to.map(UserId::new),
            created_by: UserId::new(row.created_by),
            due_date: row.due_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_TASK: &str = r#"
    SELECT id, title, description, status, priority, project_id,
           assigned_to, created_by, due_date, created_at, updated_at
    FROM tasks
"#;

fn into_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, TaskStoreError> {
    rows.into_iter()
        .map(|row| Task::try_from(row).map_err(TaskStoreError::UnexpectedError))
        .collect()
}

#[async_trait::async_trait]
impl TaskStore for PostgresTaskStore {
    #[tracing::instrument(name = "Adding task to PostgreSQL", skip_all)]
    async fn add_task(&mut self, task: Task) -> Result<(), TaskStoreError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, status, priority, project_id,
                               assigned_to, created_by, due_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(*task.id.as_ref())
        .bind(task.title.as_ref())
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(*task.project.as_ref())
        .bind(task.assigned_to.map(|id| *id.as_ref()))
        .bind(*task.created_by.as_ref())
        .bind(task.due_date)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                TaskStoreError::TaskIDExists
            }
            err => TaskStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting task from PostgreSQL", skip_all)]
    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskStoreError> {
        let row: TaskRow =
            sqlx::query_as(&format!("{SELECT_TASK} WHERE id = $1"))
                .bind(*id.as_ref())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::RowNotFound => TaskStoreError::TaskIDNotFound,
                    err => TaskStoreError::UnexpectedError(eyre!(err)),
                })?;

        row.try_into().map_err(TaskStoreError::UnexpectedError)
    }

    #[tracing::instrument(name = "Listing tasks from PostgreSQL", skip_all)]
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskStoreError> {
        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("{SELECT_TASK} ORDER BY created_at DESC"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?;

        into_tasks(rows)
    }

    #[tracing::instrument(
        name = "Listing project tasks from PostgreSQL",
        skip_all
    )]
    async fn list_tasks_for_project(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<Task>, TaskStoreError> {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "{SELECT_TASK} WHERE project_id = $1 ORDER BY created_at DESC"
        ))
        .bind(*project.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?;

        into_tasks(rows)
    }

    #[tracing::instrument(name = "Updating task in PostgreSQL", skip_all)]
    async fn update_task(&mut self, task: &Task) -> Result<(), TaskStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, priority = $5,
                assigned_to = $6, due_date = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(*task.id.as_ref())
        .bind(task.title.as_ref())
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.assigned_to.map(|id| *id.as_ref()))
        .bind(task.due_date)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(TaskStoreError::TaskIDNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Deleting task from PostgreSQL", skip_all)]
    async fn delete_task(&mut self, id: &TaskId) -> Result<(), TaskStoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(*id.as_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(TaskStoreError::TaskIDNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(
        name = "Deleting project tasks from PostgreSQL",
        skip_all
    )]
    async fn delete_tasks_for_project(
        &mut self,
        project: &ProjectId,
    ) -> Result<(), TaskStoreError> {
        sqlx::query("DELETE FROM tasks WHERE project_id = $1")
            .bind(*project.as_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?;
        Ok(())
    }
}
