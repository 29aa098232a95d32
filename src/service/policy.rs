//! Ownership and role predicates consulted before lifecycle operations.
//! Pure functions: facts that need store lookups (e.g. whether the worker
//! already applied) are loaded by the caller and passed in.

use crate::models::{
    applicationmodel::Application,
    jobmodel::{Job, JobStatus},
    usermodel::{User, UserRole},
};

pub fn is_job_owner(actor: &User, job: &Job) -> bool {
    actor.id == job.client_id
}

pub fn is_assigned_worker(actor: &User, job: &Job) -> bool {
    job.worker_id == Some(actor.id)
}

pub fn is_application_owner(actor: &User, application: &Application) -> bool {
    actor.id == application.worker_id
}

/// Accepting, rejecting or listing a job's applications is reserved for the
/// client who owns the job.
pub fn can_manage_application(actor: &User, job: &Job) -> bool {
    is_job_owner(actor, job)
}

pub fn can_apply_to_job(actor: &User, job: &Job, already_applied: bool) -> bool {
    actor.role == UserRole::Worker && !already_applied && job.status == JobStatus::Pending
}

/// Owners may request any table-legal transition; the assigned worker only
/// the two work-progress edges. Everyone else is denied.
pub fn can_update_job_status(actor: &User, job: &Job, new_status: JobStatus) -> bool {
    if is_job_owner(actor, job) {
        return job.status.can_transition_to(new_status);
    }

    if is_assigned_worker(actor, job) {
        return matches!(
            (job.status, new_status),
            (JobStatus::Accepted, JobStatus::InProgress)
                | (JobStatus::InProgress, JobStatus::Completed)
        );
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::applicationmodel::ApplicationStatus;
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    fn make_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: format!("{}@example.com", Uuid::new_v4()),
            password: "hashed".to_string(),
            role,
            created_at: None,
        }
    }

    fn make_job(client_id: Uuid, status: JobStatus) -> Job {
        Job {
            id: Uuid::new_v4(),
            client_id,
            worker_id: None,
            title: "Fix kitchen sink".to_string(),
            category: "Plumbing".to_string(),
            description: "Leaking pipe under the sink".to_string(),
            location: "Lagos".to_string(),
            budget: BigDecimal::from(150),
            deadline: None,
            status,
            created_at: None,
        }
    }

    fn make_application(job_id: Uuid, worker_id: Uuid) -> Application {
        Application {
            id: Uuid::new_v4(),
            job_id,
            worker_id,
            message: "I can do this".to_string(),
            quote: BigDecimal::from(120),
            status: ApplicationStatus::Pending,
            created_at: None,
        }
    }

    #[test]
    fn test_is_job_owner() {
        let client = make_user(UserRole::Client);
        let other = make_user(UserRole::Client);
        let job = make_job(client.id, JobStatus::Pending);

        assert!(is_job_owner(&client, &job));
        assert!(!is_job_owner(&other, &job));
    }

    #[test]
    fn test_is_assigned_worker() {
        let client = make_user(UserRole::Client);
        let worker = make_user(UserRole::Worker);
        let mut job = make_job(client.id, JobStatus::Accepted);

        assert!(!is_assigned_worker(&worker, &job));
        job.worker_id = Some(worker.id);
        assert!(is_assigned_worker(&worker, &job));
    }

    #[test]
    fn test_is_application_owner() {
        let worker = make_user(UserRole::Worker);
        let other = make_user(UserRole::Worker);
        let application = make_application(Uuid::new_v4(), worker.id);

        assert!(is_application_owner(&worker, &application));
        assert!(!is_application_owner(&other, &application));
    }

    #[test]
    fn test_can_manage_application() {
        let client = make_user(UserRole::Client);
        let stranger = make_user(UserRole::Client);
        let job = make_job(client.id, JobStatus::Pending);

        assert!(can_manage_application(&client, &job));
        assert!(!can_manage_application(&stranger, &job));
    }

    #[test]
    fn test_can_apply_to_job() {
        let client = make_user(UserRole::Client);
        let worker = make_user(UserRole::Worker);
        let job = make_job(client.id, JobStatus::Pending);

        assert!(can_apply_to_job(&worker, &job, false));
        assert!(!can_apply_to_job(&worker, &job, true));
        assert!(!can_apply_to_job(&client, &job, false));

        let accepted_job = make_job(client.id, JobStatus::Accepted);
        assert!(!can_apply_to_job(&worker, &accepted_job, false));
    }

    #[test]
    fn test_owner_may_request_any_table_legal_transition() {
        let client = make_user(UserRole::Client);
        let job = make_job(client.id, JobStatus::Pending);

        assert!(can_update_job_status(&client, &job, JobStatus::Cancelled));
        assert!(can_update_job_status(&client, &job, JobStatus::Accepted));
        assert!(!can_update_job_status(&client, &job, JobStatus::Completed));

        let done = make_job(client.id, JobStatus::Completed);
        assert!(!can_update_job_status(&client, &done, JobStatus::Pending));
        assert!(!can_update_job_status(&client, &done, JobStatus::Cancelled));
    }

    #[test]
    fn test_assigned_worker_edges() {
        let client = make_user(UserRole::Client);
        let worker = make_user(UserRole::Worker);

        let mut job = make_job(client.id, JobStatus::Accepted);
        job.worker_id = Some(worker.id);

        assert!(can_update_job_status(&worker, &job, JobStatus::InProgress));
        // accepted -> completed is not a worker edge
        assert!(!can_update_job_status(&worker, &job, JobStatus::Completed));
        assert!(!can_update_job_status(&worker, &job, JobStatus::Cancelled));

        job.status = JobStatus::InProgress;
        assert!(can_update_job_status(&worker, &job, JobStatus::Completed));
        assert!(!can_update_job_status(&worker, &job, JobStatus::Cancelled));
    }

    #[test]
    fn test_unrelated_actor_denied() {
        let client = make_user(UserRole::Client);
        let bystander = make_user(UserRole::Worker);
        let job = make_job(client.id, JobStatus::Pending);

        assert!(!can_update_job_status(&bystander, &job, JobStatus::Cancelled));
    }
}
