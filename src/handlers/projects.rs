//! Project management handlers. Every route requires a bearer token and only
//! ever touches the caller's own projects.

use actix_web::{Error, HttpResponse, Result};
use paperclip::actix::{api_v2_operation, web};
use tracing::info;

use crate::{
    models::{ApiError, CreateProjectRequest, Project},
    services::{AppState, AuthenticatedUser},
};

pub fn project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::post().to(create_project))
            .route(web::get().to(list_projects)),
    )
    .service(web::resource("/projects/{project_id}").route(web::get().to(get_project)));
}

#[api_v2_operation(
    summary = "Create Project",
    description = "Create a new project owned by the authenticated user",
    tags("Projects"),
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Invalid project name or type")
    )
)]
pub async fn create_project(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, Error> {
    let project = Project::create(&user.username, payload.into_inner())?;
    state
        .projects
        .insert(&project)
        .await
        .map_err(ApiError::from)?;

    info!(
        project_id = %project.id,
        owner = %project.owner,
        project_type = ?project.project_type,
        "Project created"
    );

    Ok(HttpResponse::Created().json(project))
}

#[api_v2_operation(
    summary = "List Projects",
    description = "List the authenticated user's projects, newest first",
    tags("Projects"),
    responses(
        (status = 200, description = "Projects owned by the caller"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn list_projects(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<web::Json<Vec<Project>>, Error> {
    let projects = state
        .projects
        .list_for_owner(&user.username)
        .await
        .map_err(ApiError::from)?;
    Ok(web::Json(projects))
}

#[api_v2_operation(
    summary = "Get Project",
    description = "Fetch one of the authenticated user's projects by id",
    tags("Projects"),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No such project for this user")
    )
)]
pub async fn get_project(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    project_id: web::Path<String>,
) -> Result<web::Json<Project>, Error> {
    state
        .projects
        .find_for_owner(&user.username, &project_id)
        .await
        .map_err(ApiError::from)?
        .map(web::Json)
        .ok_or_else(|| ApiError::NotFound("Project").into())
}
