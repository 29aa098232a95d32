// db/jobdb.rs
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use super::db::{DBClient, LOCK_TIMEOUT};

use crate::models::jobmodel::{Job, JobStatus};

#[async_trait]
pub trait JobExt {
    async fn save_job(
        &self,
        client_id: Uuid,
        title: String,
        category: String,
        description: String,
        location: String,
        budget: BigDecimal,
        deadline: Option<NaiveDate>,
    ) -> Result<Job, sqlx::Error>;

    async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>, sqlx::Error>;

    async fn get_jobs(
        &self,
        client_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        status: Option<JobStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Job>, sqlx::Error>;

    async fn get_job_count(
        &self,
        client_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        status: Option<JobStatus>,
    ) -> Result<i64, sqlx::Error>;

    async fn get_job_feed(
        &self,
        worker_id: Uuid,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Job>, sqlx::Error>;

    async fn get_job_feed_count(&self, worker_id: Uuid) -> Result<i64, sqlx::Error>;

    async fn get_job_for_update(
        &self,
        job_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Job>, sqlx::Error>;

    async fn get_job_for_share(
        &self,
        job_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Job>, sqlx::Error>;

    async fn update_job_status_tx(
        &self,
        job_id: Uuid,
        status: JobStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Job, sqlx::Error>;

    async fn assign_worker_tx(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Job, sqlx::Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn save_job(
        &self,
        client_id: Uuid,
        title: String,
        category: String,
        description: String,
        location: String,
        budget: BigDecimal,
        deadline: Option<NaiveDate>,
    ) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (client_id, title, category, description, location, budget, deadline)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, client_id, worker_id, title, category, description,
                      location, budget, deadline, status, created_at
            "#,
        )
        .bind(client_id)
        .bind(title)
        .bind(category)
        .bind(description)
        .bind(location)
        .bind(budget)
        .bind(deadline)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_jobs(
        &self,
        client_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        status: Option<JobStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::uuid IS NULL OR client_id = $1)
            AND ($2::uuid IS NULL OR worker_id = $2)
            AND ($3::job_status IS NULL OR status = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(client_id)
        .bind(worker_id)
        .bind(status)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_job_count(
        &self,
        client_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        status: Option<JobStatus>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM jobs
            WHERE ($1::uuid IS NULL OR client_id = $1)
            AND ($2::uuid IS NULL OR worker_id = $2)
            AND ($3::job_status IS NULL OR status = $3)
            "#,
        )
        .bind(client_id)
        .bind(worker_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job_feed(
        &self,
        worker_id: Uuid,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE status = 'pending'::job_status
            AND id NOT IN (
                SELECT job_id FROM applications WHERE worker_id = $1
            )
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(worker_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_job_feed_count(&self, worker_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM jobs
            WHERE status = 'pending'::job_status
            AND id NOT IN (
                SELECT job_id FROM applications WHERE worker_id = $1
            )
            "#,
        )
        .bind(worker_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job_for_update(
        &self,
        job_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query(LOCK_TIMEOUT).execute(&mut **tx).await?;

        sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(job_id)
        .fetch_optional(&mut **tx)
        .await
    }

    async fn get_job_for_share(
        &self,
        job_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query(LOCK_TIMEOUT).execute(&mut **tx).await?;

        sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE id = $1
            FOR SHARE
            "#,
        )
        .bind(job_id)
        .fetch_optional(&mut **tx)
        .await
    }

    async fn update_job_status_tx(
        &self,
        job_id: Uuid,
        status: JobStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Job, sqlx::Error> {
        // A cancelled job releases its worker; jobs only carry a worker
        // while in accepted, in_progress or completed.
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = $2,
                worker_id = CASE WHEN $2 = 'cancelled'::job_status THEN NULL ELSE worker_id END
            WHERE id = $1
            RETURNING id, client_id, worker_id, title, category, description,
                      location, budget, deadline, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
    }

    async fn assign_worker_tx(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET worker_id = $2, status = 'accepted'::job_status
            WHERE id = $1
            RETURNING id, client_id, worker_id, title, category, description,
                      location, budget, deadline, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .fetch_one(&mut **tx)
        .await
    }
}
