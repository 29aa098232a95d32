// models/workermodel.rs
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct WorkerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub location: String,
    pub hourly_rate: BigDecimal,
    pub rating: BigDecimal,
    pub review_count: i32,
    pub skills: Json<Vec<String>>,
    pub portfolio: Json<serde_json::Value>,
    pub available: bool,
    pub created_at: Option<DateTime<Utc>>, // Database has DEFAULT NOW(), can be NULL
}

/// Profile joined with the owning user's name for directory listings.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct WorkerProfileDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub category: String,
    pub location: String,
    pub hourly_rate: BigDecimal,
    pub rating: BigDecimal,
    pub review_count: i32,
    pub skills: Json<Vec<String>>,
    pub portfolio: Json<serde_json::Value>,
    pub available: bool,
    pub created_at: Option<DateTime<Utc>>,
}
