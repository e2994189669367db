//! The job lifecycle state machine: `Open → Assigned → Completed`,
//! with `Open → Cancelled` as the poster's bail-out.
//!
//! Every operation checks its full precondition chain before mutating
//! a single row, so a failure is never partially applied. Multi-row
//! cascades run inside one store write transaction (the caller's
//! `&mut Tables` borrow).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{GiglinkError, Result};
use crate::model::{ApplicationStatus, Job, JobDraft, JobStatus, JobType};
use crate::store::Tables;
use crate::workflow::notify;

/// Create a new job posting in `Open` status.
///
/// Exactly one of price/hourly_rate is mandatory depending on the job
/// type; a missing or zero amount fails validation.
pub fn post_job(
    tables: &mut Tables,
    poster_id: Uuid,
    draft: JobDraft,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    tables.user(poster_id)?;

    match draft.job_type {
        JobType::Fixed if !draft.price.is_some_and(|p| p > 0) => {
            return Err(GiglinkError::Validation(
                "Price is required for fixed price jobs".into(),
            ));
        }
        JobType::Hourly if !draft.hourly_rate.is_some_and(|r| r > 0) => {
            return Err(GiglinkError::Validation(
                "Hourly rate is required for hourly jobs".into(),
            ));
        }
        _ => {}
    }

    let job = Job::from_draft(poster_id, draft, now);
    let id = job.id;
    tables.insert_job(job);
    Ok(id)
}

/// Assign a job to the helper behind one of its applications.
///
/// Preconditions, in order, each a distinct failure: the application
/// must belong to the job, the actor must own the job, the job must be
/// open, and the applicant must be a verified helper. On success the
/// five-effect cascade applies as a unit: job status + assignee, chosen
/// application accepted, every sibling rejected, notification to the
/// helper.
pub fn assign(
    tables: &mut Tables,
    job_id: Uuid,
    application_id: Uuid,
    actor_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let application = tables.application(application_id)?;
    if application.job_id != job_id {
        return Err(GiglinkError::NotFound("Application not found".into()));
    }
    let helper_id = application.helper_id;

    let job = tables.job(job_id)?;
    if job.poster_id != actor_id {
        return Err(GiglinkError::Forbidden("Only job owner can assign jobs".into()));
    }
    if job.status != JobStatus::Open {
        return Err(GiglinkError::Conflict("Only open jobs can be assigned".into()));
    }
    if !tables.user(helper_id)?.eligible_for_assignment() {
        return Err(GiglinkError::Validation(
            "Helper must be verified before being assigned".into(),
        ));
    }

    // All preconditions hold; apply the cascade.
    let job = tables.job_mut(job_id)?;
    job.status = JobStatus::Assigned;
    job.assigned_to = Some(helper_id);
    let title = job.title.clone();

    for sibling in tables.applications_for_job_mut(job_id) {
        sibling.status = if sibling.id == application_id {
            ApplicationStatus::Accepted
        } else {
            ApplicationStatus::Rejected
        };
    }

    notify::emit(tables, helper_id, notify::assigned_message(&title), now);
    Ok(())
}

/// Which side of the job performed an action; used to word the
/// notification for the other party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorSide {
    Poster,
    Helper,
}

/// Mark an assigned job as completed.
///
/// Either the owner or the assigned helper may complete; the other
/// party is notified with a message naming which role did it.
pub fn complete(
    tables: &mut Tables,
    job_id: Uuid,
    actor_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let job = tables.job(job_id)?;

    let side = if actor_id == job.poster_id {
        ActorSide::Poster
    } else if job.assigned_to == Some(actor_id) {
        ActorSide::Helper
    } else {
        return Err(GiglinkError::Forbidden(
            "Only job owner or assigned helper can mark job as complete".into(),
        ));
    };
    if job.status != JobStatus::Assigned {
        return Err(GiglinkError::Conflict(
            "Only assigned jobs can be marked as complete".into(),
        ));
    }
    let title = job.title.clone();
    let recipient = match side {
        // assigned_to is always present on an Assigned job.
        ActorSide::Poster => job.assigned_to.ok_or_else(|| {
            GiglinkError::Conflict("Assigned job has no assignee".into())
        })?,
        ActorSide::Helper => job.poster_id,
    };

    tables.job_mut(job_id)?.status = JobStatus::Completed;
    notify::emit(tables, recipient, notify::completed_message(&title, side), now);
    Ok(())
}

/// Cancel an open job.
///
/// Owner-only and only from `Open`; a job with work in flight cannot be
/// cancelled here. Outstanding applications are rejected and their
/// helpers notified.
pub fn cancel(
    tables: &mut Tables,
    job_id: Uuid,
    actor_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let job = tables.job(job_id)?;
    if job.poster_id != actor_id {
        return Err(GiglinkError::Forbidden("Only job owner can cancel jobs".into()));
    }
    if job.status != JobStatus::Open {
        return Err(GiglinkError::Conflict("Only open jobs can be cancelled".into()));
    }

    let job = tables.job_mut(job_id)?;
    job.status = JobStatus::Cancelled;
    let title = job.title.clone();

    let mut applicants = Vec::new();
    for application in tables.applications_for_job_mut(job_id) {
        if application.status == ApplicationStatus::Applied {
            application.status = ApplicationStatus::Rejected;
            applicants.push(application.helper_id);
        }
    }
    for helper_id in applicants {
        notify::emit(tables, helper_id, notify::cancelled_message(&title), now);
    }
    Ok(())
}
