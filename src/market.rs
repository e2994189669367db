//! The `Market` facade: the operation surface request handlers call.
//!
//! Each method runs inside exactly one store transaction, which is what
//! makes the multi-row cascades (assignment, document approval,
//! registration provisioning) atomic under concurrent callers. Two
//! simultaneous assigns on one job serialize on the store's write lock;
//! whichever runs second finds the job no longer open and fails with a
//! conflict instead of silently overwriting.

use chrono::Utc;
use uuid::Uuid;

use crate::config::MarketConfig;
use crate::error::Result;
use crate::model::{
    DocumentUpload, JobDraft, Notification, RatingSummary, Role, Transaction, Wallet,
};
use crate::store::MemoryStore;
use crate::workflow::{account, arbitration, lifecycle, notify, reviews, verification};

pub struct Market {
    store: MemoryStore,
    config: MarketConfig,
}

impl Market {
    pub fn new(config: MarketConfig) -> Self {
        Self {
            store: MemoryStore::new(),
            config,
        }
    }

    // --- accounts ---

    pub fn register(
        &self,
        username: &str,
        role: Role,
        phone_number: Option<String>,
        kyc_details: Option<serde_json::Value>,
    ) -> Result<Uuid> {
        self.store.write(|t| {
            account::register(
                t,
                username.to_owned(),
                role,
                phone_number,
                kyc_details,
                Utc::now(),
            )
        })
    }

    pub fn rating_summary(&self, user_id: Uuid) -> Result<RatingSummary> {
        self.store.read(|t| account::rating_summary(t, user_id))?
    }

    // --- verification ---

    pub fn request_otp(&self, phone: &str) -> Result<String> {
        self.store
            .write(|t| verification::request_otp(t, phone, Utc::now(), &self.config))
    }

    pub fn verify_otp(&self, phone: &str, code: &str) -> Result<()> {
        self.store
            .write(|t| verification::verify_otp(t, phone, code, Utc::now(), &self.config))
    }

    pub fn submit_documents(&self, helper_id: Uuid, upload: DocumentUpload) -> Result<()> {
        self.store
            .write(|t| verification::submit_documents(t, helper_id, upload, Utc::now()))
    }

    pub fn approve_documents(&self, helper_id: Uuid, verifier_id: Uuid) -> Result<()> {
        self.store
            .write(|t| verification::approve_documents(t, helper_id, verifier_id, Utc::now()))
    }

    pub fn reject_documents(&self, helper_id: Uuid, verifier_id: Uuid, reason: &str) -> Result<()> {
        self.store.write(|t| {
            verification::reject_documents(t, helper_id, verifier_id, reason.to_owned(), Utc::now())
        })
    }

    // --- jobs ---

    pub fn post_job(&self, poster_id: Uuid, draft: JobDraft) -> Result<Uuid> {
        self.store
            .write(|t| lifecycle::post_job(t, poster_id, draft, Utc::now()))
    }

    pub fn apply(&self, job_id: Uuid, helper_id: Uuid, message: Option<String>) -> Result<Uuid> {
        self.store
            .write(|t| arbitration::apply(t, job_id, helper_id, message, Utc::now()))
    }

    pub fn assign(&self, job_id: Uuid, application_id: Uuid, actor_id: Uuid) -> Result<()> {
        self.store
            .write(|t| lifecycle::assign(t, job_id, application_id, actor_id, Utc::now()))
    }

    pub fn complete(&self, job_id: Uuid, actor_id: Uuid) -> Result<()> {
        self.store
            .write(|t| lifecycle::complete(t, job_id, actor_id, Utc::now()))
    }

    pub fn cancel(&self, job_id: Uuid, actor_id: Uuid) -> Result<()> {
        self.store
            .write(|t| lifecycle::cancel(t, job_id, actor_id, Utc::now()))
    }

    // --- reviews ---

    pub fn submit_review(
        &self,
        reviewer_id: Uuid,
        reviewed_id: Uuid,
        rating: u8,
        comment: &str,
    ) -> Result<Uuid> {
        self.store.write(|t| {
            reviews::submit_review(t, reviewer_id, reviewed_id, rating, comment.to_owned(), Utc::now())
        })
    }

    // --- read side ---

    pub fn notifications(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        self.store
            .read(|t| t.notifications_for(user_id).into_iter().cloned().collect())
    }

    pub fn mark_all_read(&self, user_id: Uuid) -> Result<usize> {
        self.store.write(|t| Ok(notify::mark_all_read(t, user_id)))
    }

    pub fn wallet(&self, user_id: Uuid) -> Result<Wallet> {
        self.store.read(|t| t.wallet_for(user_id).cloned())?
    }

    pub fn transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.store
            .read(|t| t.transactions_for(user_id).into_iter().cloned().collect())
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new(MarketConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GiglinkError;
    use crate::model::{Category, JobType, Location};

    fn fixed_job_draft(price: i64) -> JobDraft {
        JobDraft {
            title: "Paint the fence".into(),
            description: "White, two coats".into(),
            location: Location {
                lat: 48.8,
                long: 2.35,
                address: "5 Rue Verte".into(),
            },
            category: Category::Outdoor,
            job_type: JobType::Fixed,
            price: Some(price),
            hourly_rate: None,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    /// Poster posts a fixed-price job, an unverified and a verified
    /// helper both apply, assignment picks the verified one, the helper
    /// completes.
    #[test]
    fn full_marketplace_scenario() {
        let market = Market::default();
        let staff = Uuid::new_v4();

        let poster = market.register("paula", Role::Poster, None, None).unwrap();
        let h1 = market.register("h1", Role::Helper, None, None).unwrap();
        let h2 = market.register("h2", Role::Helper, None, None).unwrap();
        market.approve_documents(h2, staff).unwrap();

        let job = market.post_job(poster, fixed_job_draft(10_000)).unwrap();
        let app1 = market.apply(job, h1, None).unwrap();
        let app2 = market.apply(job, h2, Some("Done plenty of fences".into())).unwrap();

        let err = market.assign(job, app1, poster).unwrap_err();
        let GiglinkError::Validation(reason) = err else {
            panic!("expected validation error");
        };
        assert_eq!(reason, "Helper must be verified before being assigned");

        market.assign(job, app2, poster).unwrap();
        assert_eq!(market.notifications(h2).unwrap().len(), 1);

        market.complete(job, h2).unwrap();
        let poster_inbox = market.notifications(poster).unwrap();
        assert_eq!(poster_inbox.len(), 1);
        assert!(poster_inbox[0].message.contains("helper"));

        // Both sides review each other afterwards.
        market.submit_review(poster, h2, 5, "Spotless").unwrap();
        market.submit_review(h2, poster, 4, "Clear brief").unwrap();
        assert_eq!(market.rating_summary(h2).unwrap().review_count, 1);

        // Ledger stayed untouched throughout: no settlement engine.
        assert_eq!(market.wallet(h2).unwrap().balance, 0);
        assert!(market.transactions(h2).unwrap().is_empty());
    }

    #[test]
    fn otp_flow_end_to_end() {
        let market = Market::default();
        market
            .register("pete", Role::Poster, Some("+155501".into()), None)
            .unwrap();

        let code = market.request_otp("+155501").unwrap();
        market.verify_otp("+155501", &code).unwrap();

        // The code is single-use.
        let err = market.verify_otp("+155501", &code).unwrap_err();
        assert!(matches!(err, GiglinkError::Validation(_)));
    }

    #[test]
    fn notifications_mark_all_read() {
        let market = Market::default();
        let staff = Uuid::new_v4();
        let poster = market.register("po", Role::Poster, None, None).unwrap();
        let helper = market.register("he", Role::Helper, None, None).unwrap();
        market.approve_documents(helper, staff).unwrap();

        let job = market.post_job(poster, fixed_job_draft(2_000)).unwrap();
        let app = market.apply(job, helper, None).unwrap();
        market.assign(job, app, poster).unwrap();
        market.complete(job, poster).unwrap();

        assert_eq!(market.mark_all_read(helper).unwrap(), 2);
        assert!(market.notifications(helper).unwrap().iter().all(|n| n.is_read));
    }
}
