use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review state of a helper's document set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Verification document set, one per helper.
///
/// The four slots hold references to uploaded files; which slots are
/// required before approval is a staff judgement call, not enforced
/// here. Replacing any slot on an approved set drops the status back
/// to `Pending` so the new file gets looked at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperDocument {
    /// Owning helper. Document sets are keyed one-to-one by user.
    pub user_id: Uuid,
    pub identity_card: Option<String>,
    pub driving_license: Option<String>,
    pub tax_card: Option<String>,
    pub selfie: Option<String>,
    pub status: DocumentStatus,
    /// Present only after a rejection; cleared by the next approval.
    pub rejection_reason: Option<String>,
    /// Staff user who made the last approve/reject decision.
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HelperDocument {
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            identity_card: None,
            driving_license: None,
            tax_card: None,
            selfie: None,
            status: DocumentStatus::Pending,
            rejection_reason: None,
            verified_by: None,
            verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// All four slots filled.
    pub fn has_all_documents(&self) -> bool {
        self.identity_card.is_some()
            && self.driving_license.is_some()
            && self.tax_card.is_some()
            && self.selfie.is_some()
    }
}

/// File references supplied in a (re)submission. `None` slots are left
/// untouched, `Some` slots replace whatever was there.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpload {
    pub identity_card: Option<String>,
    pub driving_license: Option<String>,
    pub tax_card: Option<String>,
    pub selfie: Option<String>,
}

impl DocumentUpload {
    pub fn is_empty(&self) -> bool {
        self.identity_card.is_none()
            && self.driving_license.is_none()
            && self.tax_card.is_none()
            && self.selfie.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_set_is_pending_and_empty() {
        let doc = HelperDocument::new(Uuid::new_v4(), Utc::now());
        assert_eq!(doc.status, DocumentStatus::Pending);
        assert!(!doc.has_all_documents());
        assert!(doc.verified_by.is_none());
    }

    #[test]
    fn has_all_documents_requires_every_slot() {
        let mut doc = HelperDocument::new(Uuid::new_v4(), Utc::now());
        doc.identity_card = Some("id.pdf".into());
        doc.driving_license = Some("dl.pdf".into());
        doc.tax_card = Some("tax.pdf".into());
        assert!(!doc.has_all_documents());
        doc.selfie = Some("selfie.jpg".into());
        assert!(doc.has_all_documents());
    }
}
