// db/applicationdb.rs
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use super::db::{DBClient, LOCK_TIMEOUT};

use crate::models::applicationmodel::{Application, ApplicationDetails, ApplicationStatus};

#[async_trait]
pub trait ApplicationExt {
    async fn get_application(
        &self,
        application_id: Uuid,
    ) -> Result<Option<Application>, sqlx::Error>;

    async fn get_applications(
        &self,
        job_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        client_id: Option<Uuid>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ApplicationDetails>, sqlx::Error>;

    async fn get_application_count(
        &self,
        job_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        client_id: Option<Uuid>,
    ) -> Result<i64, sqlx::Error>;

    async fn application_exists(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<bool, sqlx::Error>;

    async fn save_application_tx(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        message: String,
        quote: BigDecimal,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Application, sqlx::Error>;

    async fn get_application_for_update(
        &self,
        application_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Application>, sqlx::Error>;

    async fn set_application_status_tx(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Application, sqlx::Error>;

    /// Rejects every still-pending application on the job except the given
    /// one, returning how many rows flipped.
    async fn reject_pending_applications_tx(
        &self,
        job_id: Uuid,
        except_application_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl ApplicationExt for DBClient {
    async fn get_application(
        &self,
        application_id: Uuid,
    ) -> Result<Option<Application>, sqlx::Error> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications
            WHERE id = $1
            "#,
        )
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_applications(
        &self,
        job_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        client_id: Option<Uuid>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ApplicationDetails>, sqlx::Error> {
        let offset = (page - 1) * limit as u32;

        sqlx::query_as::<_, ApplicationDetails>(
            r#"
            SELECT
                a.id, a.job_id, a.worker_id,
                u.name AS worker_name,
                j.title AS job_title, j.category AS job_category, j.location AS job_location,
                a.message, a.quote, a.status, a.created_at
            FROM applications a
            JOIN users u ON u.id = a.worker_id
            JOIN jobs j ON j.id = a.job_id
            WHERE ($1::uuid IS NULL OR a.job_id = $1)
            AND ($2::uuid IS NULL OR a.worker_id = $2)
            AND ($3::uuid IS NULL OR j.client_id = $3)
            ORDER BY a.created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .bind(client_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_application_count(
        &self,
        job_id: Option<Uuid>,
        worker_id: Option<Uuid>,
        client_id: Option<Uuid>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            WHERE ($1::uuid IS NULL OR a.job_id = $1)
            AND ($2::uuid IS NULL OR a.worker_id = $2)
            AND ($3::uuid IS NULL OR j.client_id = $3)
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .bind(client_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn application_exists(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM applications
                WHERE job_id = $1 AND worker_id = $2
            )
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn save_application_tx(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        message: String,
        quote: BigDecimal,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Application, sqlx::Error> {
        sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (job_id, worker_id, message, quote)
            VALUES ($1, $2, $3, $4)
            RETURNING id, job_id, worker_id, message, quote, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .bind(message)
        .bind(quote)
        .fetch_one(&mut **tx)
        .await
    }

    async fn get_application_for_update(
        &self,
        application_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Application>, sqlx::Error> {
        sqlx::query(LOCK_TIMEOUT).execute(&mut **tx).await?;

        sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(application_id)
        .fetch_optional(&mut **tx)
        .await
    }

    async fn set_application_status_tx(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Application, sqlx::Error> {
        sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = $2
            WHERE id = $1
            RETURNING id, job_id, worker_id, message, quote, status, created_at
            "#,
        )
        .bind(application_id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
    }

    async fn reject_pending_applications_tx(
        &self,
        job_id: Uuid,
        except_application_id: Uuid,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET status = 'rejected'::application_status
            WHERE job_id = $1
            AND id <> $2
            AND status = 'pending'::application_status
            "#,
        )
        .bind(job_id)
        .bind(except_application_id)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}
