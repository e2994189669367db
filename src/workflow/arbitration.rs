//! Application arbitration: who gets to apply, and the uniqueness rule
//! that makes the assignment cascade well defined.
//!
//! Accepting one application and rejecting the rest is owned by
//! `lifecycle::assign`; there is no standalone accept.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{GiglinkError, Result};
use crate::model::{JobApplication, Role};
use crate::store::Tables;

/// Apply to a job. Helpers only, one application per (job, helper)
/// pair. Returns the new application id.
pub fn apply(
    tables: &mut Tables,
    job_id: Uuid,
    helper_id: Uuid,
    message: Option<String>,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    if tables.user(helper_id)?.role != Role::Helper {
        return Err(GiglinkError::Validation(
            "Only helpers can apply for jobs".into(),
        ));
    }
    tables.job(job_id)?;
    if tables.find_application(job_id, helper_id).is_some() {
        return Err(GiglinkError::Conflict(
            "You have already applied to this job".into(),
        ));
    }

    let application = JobApplication::new(job_id, helper_id, message, now);
    let id = application.id;
    tables.insert_application(application);
    Ok(id)
}
