//! Identity verification: OTP phone checks for posters and the
//! document review pipeline for helpers.
//!
//! The two paths deliberately never cross. `verify_otp` only ever
//! verifies posters; a helper's `is_verified` flips true in exactly one
//! place, [`approve_documents`]. Rejecting a previously approved set
//! leaves the flag untouched, matching long-standing production
//! behavior that downstream consumers rely on.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config::MarketConfig;
use crate::error::{GiglinkError, Result};
use crate::model::{DocumentStatus, DocumentUpload, OtpChallenge, Role};
use crate::store::Tables;

/// Generate a numeric one-time code of the given length. Uniform
/// thread RNG; not meant to resist a determined attacker, the expiry
/// window is the real control.
fn generate_otp(digits: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..digits)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// Issue a fresh OTP to the user holding `phone`. Any previously
/// issued code is overwritten and thereby invalidated. Returns the
/// code so the (out-of-scope) SMS layer can deliver it.
pub fn request_otp(
    tables: &mut Tables,
    phone: &str,
    now: DateTime<Utc>,
    config: &MarketConfig,
) -> Result<String> {
    let user = tables
        .find_user_by_phone_mut(phone)
        .ok_or_else(|| GiglinkError::NotFound("User with this phone number not found".into()))?;

    let code = generate_otp(config.otp_digits);
    user.otp = Some(OtpChallenge {
        code: code.clone(),
        issued_at: now,
    });
    Ok(code)
}

/// Verify a phone/code pair.
///
/// Fails unless a user matches both phone and code exactly; fails with
/// [`GiglinkError::OtpExpired`] past the validity window. On success a
/// poster becomes verified; helpers pass through unverified (their path
/// is document approval). The challenge is cleared in every terminal
/// successful outcome, so a code is single-use.
pub fn verify_otp(
    tables: &mut Tables,
    phone: &str,
    code: &str,
    now: DateTime<Utc>,
    config: &MarketConfig,
) -> Result<()> {
    let invalid = || GiglinkError::Validation("Invalid phone number or OTP".into());

    let user = tables.find_user_by_phone_mut(phone).ok_or_else(invalid)?;
    let challenge = user.otp.as_ref().ok_or_else(invalid)?;
    if challenge.code != code {
        return Err(invalid());
    }

    if now > challenge.issued_at + Duration::minutes(config.otp_expiry_minutes) {
        // No mutation on the failure path; the stale challenge sits
        // until the next request_otp overwrites it.
        return Err(GiglinkError::OtpExpired);
    }

    if user.role == Role::Poster {
        user.is_verified = true;
    }
    user.otp = None;
    Ok(())
}

/// Upsert document file slots for a helper.
///
/// Replacing any slot on an approved set drops the status back to
/// `Pending` for re-review. Decision fields (verifier, timestamp,
/// rejection reason) are left as-is until the next decision overwrites
/// them.
pub fn submit_documents(
    tables: &mut Tables,
    helper_id: Uuid,
    upload: DocumentUpload,
    now: DateTime<Utc>,
) -> Result<()> {
    if upload.is_empty() {
        return Err(GiglinkError::Validation(
            "At least one document file is required".into(),
        ));
    }

    let doc = tables.document_for_mut(helper_id)?;

    if doc.status == DocumentStatus::Approved {
        doc.status = DocumentStatus::Pending;
    }

    if let Some(file) = upload.identity_card {
        doc.identity_card = Some(file);
    }
    if let Some(file) = upload.driving_license {
        doc.driving_license = Some(file);
    }
    if let Some(file) = upload.tax_card {
        doc.tax_card = Some(file);
    }
    if let Some(file) = upload.selfie {
        doc.selfie = Some(file);
    }
    doc.updated_at = now;
    Ok(())
}

/// Approve a helper's document set.
///
/// Idempotent: an already approved set is left untouched, no side
/// effects. Otherwise records the verifier and timestamp, clears any
/// rejection reason, and marks the owning user verified — the document
/// row and the user flag update under the same store transaction.
pub fn approve_documents(
    tables: &mut Tables,
    helper_id: Uuid,
    verifier_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    // Both rows must exist before either is touched.
    tables.user(helper_id)?;
    let doc = tables.document_for(helper_id)?;
    if doc.status == DocumentStatus::Approved {
        return Ok(());
    }

    let doc = tables.document_for_mut(helper_id)?;
    doc.status = DocumentStatus::Approved;
    doc.verified_by = Some(verifier_id);
    doc.verified_at = Some(now);
    doc.rejection_reason = None;
    doc.updated_at = now;

    tables.user_mut(helper_id)?.is_verified = true;
    Ok(())
}

/// Reject a helper's document set with a reason.
///
/// Idempotent on an already rejected set. Does not clear the user's
/// `is_verified` flag.
pub fn reject_documents(
    tables: &mut Tables,
    helper_id: Uuid,
    verifier_id: Uuid,
    reason: String,
    now: DateTime<Utc>,
) -> Result<()> {
    let doc = tables.document_for_mut(helper_id)?;
    if doc.status == DocumentStatus::Rejected {
        return Ok(());
    }

    doc.status = DocumentStatus::Rejected;
    doc.verified_by = Some(verifier_id);
    doc.verified_at = Some(now);
    doc.rejection_reason = Some(reason);
    doc.updated_at = now;
    Ok(())
}
