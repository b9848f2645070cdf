use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    domain::{
        authorize_project, ProjectAPIError, ProjectAction, ProjectId,
        UserSummary,
    },
    routes::ViewBuilder,
    utils::auth::get_actor,
    AppState,
};

use super::fetch_project;

/// Everyone a task in this project may be assigned to, creator first.
#[tracing::instrument(name = "Get project members route handler", skip_all)]
pub async fn get_project_members(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<UserSummary>>, ProjectAPIError> {
    let actor = get_actor(&jar, &state.banned_token_store).await?;
    let project_id = ProjectId::parse(&project_id)?;

    let project = fetch_project(&state, &project_id).await?;
    authorize_project(&actor, &project, ProjectAction::View)?;

    let members = ViewBuilder::new(&state)
        .users(&project.effective_members())
        .await?;

    Ok(Json(members))
}
