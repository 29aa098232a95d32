// handlers/workers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::workerdb::WorkerExt,
    dtos::{
        jobdtos::{ApiResponse, PaginatedResponse},
        workerdtos::*,
    },
    error::HttpError,
    middleware::{role_check, JWTAuthMiddeware},
    models::usermodel::UserRole,
    AppState,
};

pub fn workers_handler() -> Router {
    Router::new()
        .route("/", get(search_workers))
        .route(
            "/me",
            get(get_my_profile)
                .put(upsert_my_profile)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Worker])
                })),
        )
        .route("/:profile_id", get(get_worker))
}

pub async fn search_workers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<SearchWorkersDto>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    // The directory lists available workers unless the caller asks otherwise.
    let available = params.available.or(Some(true));
    let min_hourly_rate = params.min_hourly_rate.and_then(BigDecimal::from_f64);
    let max_hourly_rate = params.max_hourly_rate.and_then(BigDecimal::from_f64);
    let min_rating = params.min_rating.and_then(BigDecimal::from_f64);

    let workers = app_state
        .db_client
        .get_worker_profiles(
            params.category.as_deref(),
            params.location.as_deref(),
            available,
            min_hourly_rate.clone(),
            max_hourly_rate.clone(),
            min_rating.clone(),
            page as u32,
            limit,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .get_worker_profile_count(
            params.category.as_deref(),
            params.location.as_deref(),
            available,
            min_hourly_rate,
            max_hourly_rate,
            min_rating,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        workers,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(profile_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = app_state
        .db_client
        .get_worker_profile(profile_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Worker profile not found"))?;

    Ok(Json(ApiResponse::success(
        "Worker profile retrieved successfully",
        profile,
    )))
}

pub async fn get_my_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = app_state
        .db_client
        .get_worker_profile_by_user(auth.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::not_found("Worker profile not found"))?;

    Ok(Json(ApiResponse::success(
        "Worker profile retrieved successfully",
        profile,
    )))
}

pub async fn upsert_my_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpsertWorkerProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let hourly_rate = BigDecimal::from_f64(body.hourly_rate)
        .ok_or(HttpError::bad_request("Hourly rate is not a valid number"))?;

    let profile = app_state
        .db_client
        .upsert_worker_profile(
            auth.user.id,
            body.category,
            body.location,
            hourly_rate,
            body.skills.unwrap_or_default(),
            body.portfolio.unwrap_or_else(|| serde_json::json!([])),
            body.available.unwrap_or(true),
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Worker profile saved successfully",
        profile,
    )))
}
