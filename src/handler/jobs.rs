// handlers/jobs.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{applicationdb::ApplicationExt, jobdb::JobExt},
    dtos::{
        applicationdtos::CreateApplicationDto,
        jobdtos::*,
        userdtos::RequestQueryDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{role_check, JWTAuthMiddeware},
    models::{jobmodel::JobStatus, usermodel::UserRole},
    service::policy,
    AppState,
};

pub fn jobs_handler() -> Router {
    Router::new()
        .route(
            "/",
            post(create_job)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Client])
                }))
                .get(list_jobs),
        )
        .route(
            "/feed",
            get(job_feed).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Worker])
            })),
        )
        .route("/:job_id", get(get_job).patch(update_job_status))
        .route(
            "/:job_id/applications",
            post(apply_to_job)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Worker])
                }))
                .get(list_job_applications),
        )
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let budget = BigDecimal::from_f64(body.budget)
        .ok_or(HttpError::bad_request("Budget is not a valid number"))?;

    let job = app_state
        .db_client
        .save_job(
            auth.user.id,
            body.title,
            body.category,
            body.description,
            body.location,
            budget,
            body.deadline,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Job created successfully", job)),
    ))
}

pub async fn list_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query_params): Query<JobListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let jobs = app_state
        .db_client
        .get_jobs(
            query_params.client_id,
            query_params.worker_id,
            query_params.status,
            page as u32,
            limit,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .get_job_count(
            query_params.client_id,
            query_params.worker_id,
            query_params.status,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        jobs,
        total,
        page as u32,
        limit as u32,
    )))
}

/// Pending jobs the authenticated worker has not yet applied to.
pub async fn job_feed(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Query(query_params): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let jobs = app_state
        .db_client
        .get_job_feed(auth.user.id, page as u32, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .get_job_feed_count(auth.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        jobs,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    Ok(Json(ApiResponse::success(
        "Job retrieved successfully",
        job,
    )))
}

pub async fn update_job_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<UpdateJobStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .job_service
        .transition_job_status(job_id, body.status, &auth.user)
        .await?;

    Ok(Json(ApiResponse::success(
        "Job status updated successfully",
        job,
    )))
}

pub async fn apply_to_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let job = app_state
        .db_client
        .get_job(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    let already_applied = app_state
        .db_client
        .application_exists(job_id, auth.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if !policy::can_apply_to_job(&auth.user, &job, already_applied) {
        if already_applied {
            return Err(HttpError::conflict("Worker has already applied to this job"));
        }
        if job.status != JobStatus::Pending {
            return Err(HttpError::bad_request(
                "Job is no longer accepting applications",
            ));
        }
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    let quote = BigDecimal::from_f64(body.quote)
        .ok_or(HttpError::bad_request("Quote is not a valid number"))?;

    let application = app_state
        .job_service
        .apply_to_job(job_id, auth.user.id, body.message, quote)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Application submitted successfully",
            application,
        )),
    ))
}

pub async fn list_job_applications(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(job_id): Path<Uuid>,
    Query(query_params): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);
    let limit = query_params.limit.unwrap_or(10);

    let job = app_state
        .db_client
        .get_job(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Job not found"))?;

    if !policy::can_manage_application(&auth.user, &job) {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    let applications = app_state
        .db_client
        .get_applications(Some(job_id), None, None, page as u32, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .get_application_count(Some(job_id), None, None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        applications,
        total,
        page as u32,
        limit as u32,
    )))
}
