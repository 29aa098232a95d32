// models/jobmodel.rs
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn to_str(&self) -> &str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Accepted => "accepted",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }

    /// The one transition table. Every status write, whether a direct edit
    /// or the acceptance flow, goes through this check.
    pub fn can_transition_to(self, to: JobStatus) -> bool {
        matches!(
            (self, to),
            (JobStatus::Pending, JobStatus::Accepted)
                | (JobStatus::Pending, JobStatus::Cancelled)
                | (JobStatus::Accepted, JobStatus::InProgress)
                | (JobStatus::Accepted, JobStatus::Cancelled)
                | (JobStatus::InProgress, JobStatus::Completed)
                | (JobStatus::InProgress, JobStatus::Cancelled)
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub client_id: Uuid,
    pub worker_id: Option<Uuid>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub budget: BigDecimal,
    pub deadline: Option<NaiveDate>,
    pub status: JobStatus,
    pub created_at: Option<DateTime<Utc>>, // Database has DEFAULT NOW(), can be NULL
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [JobStatus; 5] = [
        JobStatus::Pending,
        JobStatus::Accepted,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    #[test]
    fn test_pending_transitions() {
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Accepted));
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Cancelled));
        assert!(!JobStatus::Pending.can_transition_to(JobStatus::InProgress));
        assert!(!JobStatus::Pending.can_transition_to(JobStatus::Completed));
        assert!(!JobStatus::Pending.can_transition_to(JobStatus::Pending));
    }

    #[test]
    fn test_accepted_transitions() {
        assert!(JobStatus::Accepted.can_transition_to(JobStatus::InProgress));
        assert!(JobStatus::Accepted.can_transition_to(JobStatus::Cancelled));
        assert!(!JobStatus::Accepted.can_transition_to(JobStatus::Completed));
        assert!(!JobStatus::Accepted.can_transition_to(JobStatus::Pending));
    }

    #[test]
    fn test_in_progress_transitions() {
        assert!(JobStatus::InProgress.can_transition_to(JobStatus::Completed));
        assert!(JobStatus::InProgress.can_transition_to(JobStatus::Cancelled));
        assert!(!JobStatus::InProgress.can_transition_to(JobStatus::Accepted));
        assert!(!JobStatus::InProgress.can_transition_to(JobStatus::Pending));
    }

    #[test]
    fn test_terminal_states_allow_nothing() {
        for to in ALL {
            assert!(!JobStatus::Completed.can_transition_to(to));
            assert!(!JobStatus::Cancelled.can_transition_to(to));
        }
    }
}
