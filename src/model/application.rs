use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a helper's application to a job. At most one application
/// per job ever holds `Accepted`; the assignment cascade rejects the
/// rest the moment one is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Accepted,
    Rejected,
}

/// Links one job with one helper; unique per (job, helper) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub helper_id: Uuid,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn new(job_id: Uuid, helper_id: Uuid, message: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            helper_id,
            status: ApplicationStatus::Applied,
            message,
            created_at: now,
        }
    }
}
