use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace role, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates job postings and pays for completed work.
    Poster,
    /// Applies to and performs jobs; subject to document verification.
    Helper,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Poster => write!(f, "poster"),
            Role::Helper => write!(f, "helper"),
        }
    }
}

/// A pending phone-verification code. Cleared as a unit once consumed
/// or found expired, so code and issuance time never go out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

/// A registered marketplace participant.
///
/// `is_verified` has role-dependent meaning: a poster becomes verified
/// through OTP phone verification, a helper only through document
/// approval. The workflow core never flips the flag outside those two
/// paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub phone_number: Option<String>,
    pub is_verified: bool,
    /// Free-form KYC payload captured at registration.
    pub kyc_details: Option<serde_json::Value>,
    pub otp: Option<OtpChallenge>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, role: Role, phone_number: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            role,
            phone_number,
            is_verified: false,
            kyc_details: None,
            otp: None,
            created_at: now,
        }
    }

    /// Whether this user may be assigned a job. Only verified helpers
    /// qualify; posters are never on the receiving end of an assignment.
    pub fn eligible_for_assignment(&self) -> bool {
        matches!(self.role, Role::Helper) && self.is_verified
    }
}
