// dtos/jobdtos.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::jobmodel::JobStatus;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateJobDto {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 120, message = "Category is required"))]
    pub category: String,

    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: String,

    #[validate(length(min = 1, max = 120, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 1.0, message = "Budget must be positive"))]
    pub budget: f64,

    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusDto {
    pub status: JobStatus,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct JobListQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
    pub client_id: Option<Uuid>,
    pub worker_id: Option<Uuid>,
    pub status: Option<JobStatus>,
}

// Response wrappers
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub status: String,
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            status: "success".to_string(),
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_rounds_up() {
        let resp: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 21, 1, 10);
        assert_eq!(resp.total_pages, 3);

        let resp: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 20, 1, 10);
        assert_eq!(resp.total_pages, 2);

        let resp: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 0, 1, 10);
        assert_eq!(resp.total_pages, 0);
    }

    #[test]
    fn test_create_job_dto_rejects_zero_budget() {
        let dto = CreateJobDto {
            title: "Fix sink".to_string(),
            category: "Plumbing".to_string(),
            description: "The kitchen sink leaks badly".to_string(),
            location: "Lagos".to_string(),
            budget: 0.0,
            deadline: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_status_filter_deserializes_lowercase() {
        let query: JobListQueryDto =
            serde_json::from_str(r#"{"status": "in_progress"}"#).unwrap();
        assert_eq!(query.status, Some(JobStatus::InProgress));
    }
}
