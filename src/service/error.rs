use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::{error::HttpError, models::jobmodel::JobStatus};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Job {0} not found")]
    JobNotFound(Uuid),

    #[error("Application {0} not found")]
    ApplicationNotFound(Uuid),

    #[error("{0}")]
    InvalidState(String),

    #[error("Job cannot move from {} to {}", from.to_str(), to.to_str())]
    InvalidTransition { from: JobStatus, to: JobStatus },

    #[error("Worker has already applied to this job")]
    DuplicateApplication,

    #[error("{0}")]
    Forbidden(String),

    #[error("The job was updated by a concurrent request, please retry")]
    Conflict,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

// Unique violations inside the application unit of work and lock timeouts
// carry lifecycle meaning; everything else stays a database error.
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                Some("23505") => return ServiceError::DuplicateApplication,
                Some("55P03") => return ServiceError::Conflict,
                _ => {}
            }
        }
        ServiceError::Database(err)
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        let status = error.status_code();
        HttpError::new(error.to_string(), status)
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::JobNotFound(_) | ServiceError::ApplicationNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            ServiceError::InvalidState(_) | ServiceError::InvalidTransition { .. } => {
                StatusCode::BAD_REQUEST
            }

            ServiceError::DuplicateApplication | ServiceError::Conflict => StatusCode::CONFLICT,

            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,

            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let id = Uuid::new_v4();
        assert_eq!(
            ServiceError::JobNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::ApplicationNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::InvalidState("nope".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::InvalidTransition {
                from: JobStatus::Completed,
                to: JobStatus::Pending
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::DuplicateApplication.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ServiceError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ServiceError::Forbidden("no".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_http_error_conversion() {
        let err: HttpError = ServiceError::DuplicateApplication.into();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err: HttpError = ServiceError::InvalidTransition {
            from: JobStatus::Cancelled,
            to: JobStatus::Pending,
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("cancelled"));

        let err: HttpError = ServiceError::JobNotFound(Uuid::new_v4()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
