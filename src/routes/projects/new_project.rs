use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{Project, ProjectAPIError, ProjectName},
    routes::{ProjectView, ViewBuilder},
    utils::auth::get_actor,
    AppState,
};

use super::resolve_members;

#[tracing::instrument(name = "Create new project route handler", skip_all)]
pub async fn new_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<NewProjectRequest>,
) -> Result<(StatusCode, Json<ProjectView>), ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let name = ProjectName::parse(&request.name)?;
    let members = resolve_members(&state, &request.members).await?;

    let project = Project::new(name, request.description, actor.id, members);

    state
        .project_store
        .write()
        .await
        .add_project(project.clone())
        .await
        .map_err(|e| ProjectAPIError::UnexpectedError(eyre!(e)))?;

    let view = ViewBuilder::new(&state).project(project).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

#[derive(Debug, Deserialize)]
pub struct NewProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<String>,
}
