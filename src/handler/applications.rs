// handlers/applications.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{applicationdb::ApplicationExt, jobdb::JobExt},
    dtos::{
        applicationdtos::{AcceptanceDto, ApplicationListQueryDto},
        jobdtos::{ApiResponse, PaginatedResponse},
    },
    error::{ErrorMessage, HttpError},
    middleware::{role_check, JWTAuthMiddeware},
    models::usermodel::UserRole,
    service::policy,
    AppState,
};

pub fn applications_handler() -> Router {
    Router::new()
        .route("/", get(list_my_applications))
        .route("/:application_id", get(get_application))
        .route(
            "/:application_id/accept",
            post(accept_application).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Client])
            })),
        )
        .route(
            "/:application_id/reject",
            post(reject_application).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Client])
            })),
        )
}

/// Workers see the applications they submitted; clients see the ones
/// submitted against their jobs.
pub async fn list_my_applications(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Query(query_params): Query<ApplicationListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let (worker_filter, client_filter) = match auth.user.role {
        UserRole::Worker => (Some(auth.user.id), None),
        UserRole::Client => (None, Some(auth.user.id)),
    };

    let applications = app_state
        .db_client
        .get_applications(
            query_params.job_id,
            worker_filter,
            client_filter,
            page as u32,
            limit,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .get_application_count(query_params.job_id, worker_filter, client_filter)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        applications,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let application = app_state
        .db_client
        .get_application(application_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Application not found"))?;

    let job = app_state
        .db_client
        .get_job(application.job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    if !policy::is_application_owner(&auth.user, &application)
        && !policy::can_manage_application(&auth.user, &job)
    {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(
        "Application retrieved successfully",
        application,
    )))
}

pub async fn accept_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let application = app_state
        .db_client
        .get_application(application_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Application not found"))?;

    let job = app_state
        .db_client
        .get_job(application.job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    if !policy::can_manage_application(&auth.user, &job) {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    let (job, application) = app_state
        .job_service
        .accept_application(application_id)
        .await?;

    Ok(Json(ApiResponse::success(
        "Application accepted successfully",
        AcceptanceDto { job, application },
    )))
}

pub async fn reject_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let application = app_state
        .db_client
        .get_application(application_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Application not found"))?;

    let job = app_state
        .db_client
        .get_job(application.job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    if !policy::can_manage_application(&auth.user, &job) {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    let application = app_state
        .job_service
        .reject_application(application_id)
        .await?;

    Ok(Json(ApiResponse::success(
        "Application rejected successfully",
        application,
    )))
}
