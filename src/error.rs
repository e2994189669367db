use thiserror::Error;

/// Caller-recoverable failures of the workflow core plus the handful of
/// infrastructure errors the binary layer can hit.
///
/// Every workflow variant carries a distinct, machine-checkable reason
/// string; no operation ever fails with a generic "error".
#[derive(Debug, Error)]
pub enum GiglinkError {
    /// Malformed input or a business-rule violation (missing price,
    /// role mismatch, unverified helper, rating out of range).
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced entity is absent or not in the claimed relationship.
    #[error("not found: {0}")]
    NotFound(String),

    /// The actor lacks authority over the target.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A state precondition was violated (job not open, job not
    /// assigned, duplicate application, duplicate review).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The OTP is past its validity window.
    #[error("OTP has expired")]
    OtpExpired,

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    StorePoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GiglinkError {
    /// HTTP status the API layer maps this failure to.
    ///
    /// State conflicts are normalized to 409 across the board, including
    /// "job not open" which some clients historically saw as a 400.
    pub fn http_status(&self) -> u16 {
        match self {
            GiglinkError::Validation(_) => 400,
            GiglinkError::NotFound(_) => 404,
            GiglinkError::Forbidden(_) => 403,
            GiglinkError::Conflict(_) => 409,
            GiglinkError::OtpExpired => 400,
            GiglinkError::StorePoisoned | GiglinkError::Io(_) | GiglinkError::Toml(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, GiglinkError>;
