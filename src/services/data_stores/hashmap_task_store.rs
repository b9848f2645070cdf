use std::collections::HashMap;

use crate::domain::{ProjectId, Task, TaskId, TaskStore, TaskStoreError};

#[derive(Default)]
pub struct HashmapTaskStore {
    tasks: HashMap<TaskId, Task>,
}

fn newest_first(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tasks
}

#[async_trait::async_trait]
impl TaskStore for HashmapTaskStore {
    async fn add_task(&mut self, task: Task) -> Result<(), TaskStoreError> {
        if self.tasks.contains_key(&task.id) {
            return Err(TaskStoreError::TaskIDExists);
        }
        self.tasks.insert(task.id, task);
        Ok(())
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskStoreError> {
        self.tasks
            .get(id)
            .cloned()
            .ok_or(TaskStoreError::TaskIDNotFound)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, TaskStoreError> {
        Ok(newest_first(self.tasks.values().cloned().collect()))
    }

    async fn list_tasks_for_project(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<Task>, TaskStoreError> {
        Ok(newest_first(
            self.tasks
                .values()
                .filter(|task| &task.project == project)
                .cloned()
                .collect(),
        ))
    }

    async fn update_task(&mut self, task: &Task) -> Result<(), TaskStoreError> {
        match self.tasks.get_mut(&task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(())
            }
            None => Err(TaskStoreError::TaskIDNotFound),
        }
    }

    async fn delete_task(&mut self, id: &TaskId) -> Result<(), TaskStoreError> {
        match self.tasks.remove(id) {
            Some(_) => Ok(()),
            None => Err(TaskStoreError::TaskIDNotFound),
        }
    }

    async fn delete_tasks_for_project(
        &mut self,
        project: &ProjectId,
    ) -> Result<(), TaskStoreError> {
        self.tasks.retain(|_, task| &task.project != project);
        Ok(())
    }
}
