// db/workerdb.rs
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::types::Json;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::workermodel::{WorkerProfile, WorkerProfileDetails};

#[async_trait]
pub trait WorkerExt {
    async fn get_worker_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<WorkerProfileDetails>, sqlx::Error>;

    async fn get_worker_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error>;

    async fn get_worker_profiles(
        &self,
        category: Option<&str>,
        location: Option<&str>,
        available: Option<bool>,
        min_hourly_rate: Option<BigDecimal>,
        max_hourly_rate: Option<BigDecimal>,
        min_rating: Option<BigDecimal>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<WorkerProfileDetails>, sqlx::Error>;

    async fn get_worker_profile_count(
        &self,
        category: Option<&str>,
        location: Option<&str>,
        available: Option<bool>,
        min_hourly_rate: Option<BigDecimal>,
        max_hourly_rate: Option<BigDecimal>,
        min_rating: Option<BigDecimal>,
    ) -> Result<i64, sqlx::Error>;

    async fn upsert_worker_profile(
        &self,
        user_id: Uuid,
        category: String,
        location: String,
        hourly_rate: BigDecimal,
        skills: Vec<String>,
        portfolio: serde_json::Value,
        available: bool,
    ) -> Result<WorkerProfile, sqlx::Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn get_worker_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<WorkerProfileDetails>, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfileDetails>(
            r#"
            SELECT
                wp.id, wp.user_id, u.name AS user_name,
                wp.category, wp.location, wp.hourly_rate,
                wp.rating, wp.review_count, wp.skills, wp.portfolio,
                wp.available, wp.created_at
            FROM worker_profiles wp
            JOIN users u ON u.id = wp.user_id
            WHERE wp.id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_worker_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT id, user_id, category, location, hourly_rate, rating,
                   review_count, skills, portfolio, available, created_at
            FROM worker_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_worker_profiles(
        &self,
        category: Option<&str>,
        location: Option<&str>,
        available: Option<bool>,
        min_hourly_rate: Option<BigDecimal>,
        max_hourly_rate: Option<BigDecimal>,
        min_rating: Option<BigDecimal>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<WorkerProfileDetails>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, WorkerProfileDetails>(
            r#"
            SELECT
                wp.id, wp.user_id, u.name AS user_name,
                wp.category, wp.location, wp.hourly_rate,
                wp.rating, wp.review_count, wp.skills, wp.portfolio,
                wp.available, wp.created_at
            FROM worker_profiles wp
            JOIN users u ON u.id = wp.user_id
            WHERE ($1::text IS NULL OR wp.category ILIKE $1)
            AND ($2::text IS NULL OR wp.location ILIKE $2)
            AND ($3::bool IS NULL OR wp.available = $3)
            AND ($4::numeric IS NULL OR wp.hourly_rate >= $4)
            AND ($5::numeric IS NULL OR wp.hourly_rate <= $5)
            AND ($6::numeric IS NULL OR wp.rating >= $6)
            ORDER BY wp.rating DESC, wp.review_count DESC
            LIMIT $7 OFFSET $8
            "#,
        )
        .bind(category.map(|c| format!("%{}%", c)))
        .bind(location.map(|l| format!("%{}%", l)))
        .bind(available)
        .bind(min_hourly_rate)
        .bind(max_hourly_rate)
        .bind(min_rating)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_worker_profile_count(
        &self,
        category: Option<&str>,
        location: Option<&str>,
        available: Option<bool>,
        min_hourly_rate: Option<BigDecimal>,
        max_hourly_rate: Option<BigDecimal>,
        min_rating: Option<BigDecimal>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM worker_profiles wp
            WHERE ($1::text IS NULL OR wp.category ILIKE $1)
            AND ($2::text IS NULL OR wp.location ILIKE $2)
            AND ($3::bool IS NULL OR wp.available = $3)
            AND ($4::numeric IS NULL OR wp.hourly_rate >= $4)
            AND ($5::numeric IS NULL OR wp.hourly_rate <= $5)
            AND ($6::numeric IS NULL OR wp.rating >= $6)
            "#,
        )
        .bind(category.map(|c| format!("%{}%", c)))
        .bind(location.map(|l| format!("%{}%", l)))
        .bind(available)
        .bind(min_hourly_rate)
        .bind(max_hourly_rate)
        .bind(min_rating)
        .fetch_one(&self.pool)
        .await
    }

    async fn upsert_worker_profile(
        &self,
        user_id: Uuid,
        category: String,
        location: String,
        hourly_rate: BigDecimal,
        skills: Vec<String>,
        portfolio: serde_json::Value,
        available: bool,
    ) -> Result<WorkerProfile, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            INSERT INTO worker_profiles (user_id, category, location, hourly_rate, skills, portfolio, available)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET category = EXCLUDED.category,
                location = EXCLUDED.location,
                hourly_rate = EXCLUDED.hourly_rate,
                skills = EXCLUDED.skills,
                portfolio = EXCLUDED.portfolio,
                available = EXCLUDED.available
            RETURNING id, user_id, category, location, hourly_rate, rating,
                      review_count, skills, portfolio, available, created_at
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(location)
        .bind(hourly_rate)
        .bind(Json(skills))
        .bind(Json(portfolio))
        .bind(available)
        .fetch_one(&self.pool)
        .await
    }
}
