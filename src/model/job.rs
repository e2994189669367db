use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a job posting.
///
/// Transitions owned by the workflow core: `Open → Assigned →
/// Completed` and `Open → Cancelled`. `assigned_to` is populated iff
/// the status is `Assigned` or `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Assigned,
    Completed,
    Cancelled,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Open => write!(f, "open"),
            JobStatus::Assigned => write!(f, "assigned"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Pricing model; decides which of price/hourly_rate is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Fixed,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pet,
    Home,
    Outdoor,
    Delivery,
    Other,
}

/// Where the work happens. Stored verbatim; nothing in the workflow
/// core matches or ranks on coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
    pub address: String,
}

/// A job posting owned by exactly one poster.
///
/// Amounts are integer minor units (cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub poster_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub category: Category,
    pub job_type: JobType,
    pub price: Option<i64>,
    pub hourly_rate: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: JobStatus,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new posting; everything the poster
/// types in, nothing the lifecycle owns.
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub category: Category,
    pub job_type: JobType,
    pub price: Option<i64>,
    pub hourly_rate: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Job {
    pub fn from_draft(poster_id: Uuid, draft: JobDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            poster_id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            category: draft.category,
            job_type: draft.job_type,
            price: draft.price,
            hourly_rate: draft.hourly_rate,
            start_time: draft.start_time,
            end_time: draft.end_time,
            status: JobStatus::Open,
            assigned_to: None,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn draft() -> JobDraft {
        JobDraft {
            title: "Walk my dog".into(),
            description: "Twice a day".into(),
            location: Location {
                lat: 12.97,
                long: 77.59,
                address: "12 Hill Road".into(),
            },
            category: Category::Pet,
            job_type: JobType::Fixed,
            price: Some(10_000),
            hourly_rate: None,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    #[test]
    fn new_job_opens_unassigned() {
        let job = Job::from_draft(Uuid::new_v4(), draft(), Utc::now());
        assert_eq!(job.status, JobStatus::Open);
        assert!(job.assigned_to.is_none());
    }

    #[test]
    fn status_display() {
        assert_eq!(JobStatus::Open.to_string(), "open");
        assert_eq!(JobStatus::Assigned.to_string(), "assigned");
        assert_eq!(JobStatus::Completed.to_string(), "completed");
        assert_eq!(JobStatus::Cancelled.to_string(), "cancelled");
    }
}
