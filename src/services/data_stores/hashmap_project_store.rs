use std::collections::HashMap;

use crate::domain::{
    Project, ProjectId, ProjectScope, ProjectStore, ProjectStoreError,
};

#[derive(Default)]
pub struct HashmapProjectStore {
    projects: HashMap<ProjectId, Project>,
}

#[async_trait::async_trait]
impl ProjectStore for HashmapProjectStore {
    async fn add_project(
        &mut self,
        project: Project,
    ) -> Result<(), ProjectStoreError> {
        if self.projects.contains_key(&project.id) {
            return Err(ProjectStoreError::ProjectIDExists);
        }
        self.projects.insert(project.id, project);
        Ok(())
    }

    async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        self.projects
            .get(id)
            .cloned()
            .ok_or(ProjectStoreError::ProjectIDNotFound)
    }

    async fn list_projects(
        &self,
        scope: &ProjectScope,
    ) -> Result<Vec<Project>, ProjectStoreError> {
        let mut projects: Vec<Project> = self
            .projects
            .values()
            .filter(|project| scope.includes(project))
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn update_project(
        &mut self,
        project: &Project,
    ) -> Result<(), ProjectStoreError> {
        match self.projects.get_mut(&project.id) {
            Some(existing) => {
                *existing = project.clone();
                Ok(())
            }
            None => Err(ProjectStoreError::ProjectIDNotFound),
        }
    }

    async fn delete_project(
        &mut self,
        id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        match self.projects.remove(id) {
            Some(_) => Ok(()),
            None => Err(ProjectStoreError::ProjectIDNotFound),
        }
    }
}
