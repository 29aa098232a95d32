// dtos/applicationdtos.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{applicationmodel::Application, jobmodel::Job};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateApplicationDto {
    #[validate(length(
        min = 10,
        max = 2500,
        message = "Message must be between 10 and 2500 characters"
    ))]
    pub message: String,

    #[validate(range(min = 1.0, message = "Quote must be positive"))]
    pub quote: f64,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ApplicationListQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
    pub job_id: Option<Uuid>,
}

/// Payload returned by the acceptance endpoint: the accepted application
/// together with the job it now owns.
#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptanceDto {
    pub job: Job,
    pub application: Application,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_application_dto_rejects_short_message() {
        let dto = CreateApplicationDto {
            message: "hi".to_string(),
            quote: 100.0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_application_dto_accepts_valid_input() {
        let dto = CreateApplicationDto {
            message: "I have fixed dozens of sinks like this one".to_string(),
            quote: 100.0,
        };
        assert!(dto.validate().is_ok());
    }
}
