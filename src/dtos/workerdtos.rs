// dtos/workerdtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Validate)]
pub struct SearchWorkersDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,

    pub category: Option<String>,
    pub location: Option<String>,
    pub available: Option<bool>,

    #[validate(range(min = 0.0, message = "Minimum hourly rate must be positive"))]
    pub min_hourly_rate: Option<f64>,
    #[validate(range(min = 0.0, message = "Maximum hourly rate must be positive"))]
    pub max_hourly_rate: Option<f64>,
    #[validate(range(min = 0.0, max = 5.0, message = "Minimum rating must be between 0 and 5"))]
    pub min_rating: Option<f64>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpsertWorkerProfileDto {
    #[validate(length(min = 1, max = 120, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, max = 120, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 0.0, message = "Hourly rate must be positive"))]
    pub hourly_rate: f64,

    pub skills: Option<Vec<String>>,
    pub portfolio: Option<serde_json::Value>,
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_dto_rejects_out_of_range_rating() {
        let dto = SearchWorkersDto {
            page: None,
            limit: None,
            category: None,
            location: None,
            available: None,
            min_hourly_rate: None,
            max_hourly_rate: None,
            min_rating: Some(7.5),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_upsert_dto_rejects_negative_rate() {
        let dto = UpsertWorkerProfileDto {
            category: "Plumbing".to_string(),
            location: "Lagos".to_string(),
            hourly_rate: -5.0,
            skills: None,
            portfolio: None,
            available: None,
        };
        assert!(dto.validate().is_err());
    }
}
