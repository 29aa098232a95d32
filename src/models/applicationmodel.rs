// models/applicationmodel.rs
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub message: String,
    pub quote: BigDecimal,
    pub status: ApplicationStatus,
    pub created_at: Option<DateTime<Utc>>, // Database has DEFAULT NOW(), can be NULL
}

/// Application row joined with the worker's name and the job summary,
/// the shape list endpoints return.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct ApplicationDetails {
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub worker_name: String,
    pub job_title: String,
    pub job_category: String,
    pub job_location: String,
    pub message: String,
    pub quote: BigDecimal,
    pub status: ApplicationStatus,
    pub created_at: Option<DateTime<Utc>>,
}
