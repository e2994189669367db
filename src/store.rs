//! In-memory relational store behind the workflow core.
//!
//! [`Tables`] is the full data set with repository-style accessors per
//! entity; the workflow core only ever sees `&Tables` / `&mut Tables`
//! and never reaches into the maps directly from outside this module.
//!
//! [`MemoryStore`] wraps the tables in an `RwLock` and scopes every
//! access to a closure. An exclusive write borrow covers all tables at
//! once, so a multi-row cascade (assign's five effects, approve's
//! document + user pair) commits or fails as a unit: two concurrent
//! assigns on the same job serialize on the lock, and the loser sees
//! the job already out of `Open`.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{GiglinkError, Result};
use crate::model::{
    HelperDocument, Job, JobApplication, Notification, Review, Transaction, User, Wallet,
};

/// Every entity table, keyed by primary id (documents and wallets are
/// one-to-one with users and keyed by user id).
#[derive(Debug, Default)]
pub struct Tables {
    users: HashMap<Uuid, User>,
    documents: HashMap<Uuid, HelperDocument>,
    jobs: HashMap<Uuid, Job>,
    applications: HashMap<Uuid, JobApplication>,
    reviews: HashMap<Uuid, Review>,
    wallets: HashMap<Uuid, Wallet>,
    transactions: HashMap<Uuid, Transaction>,
    notifications: HashMap<Uuid, Notification>,
}

impl Tables {
    // --- users ---

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn user(&self, id: Uuid) -> Result<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| GiglinkError::NotFound("User not found".into()))
    }

    pub fn user_mut(&mut self, id: Uuid) -> Result<&mut User> {
        self.users
            .get_mut(&id)
            .ok_or_else(|| GiglinkError::NotFound("User not found".into()))
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub fn find_user_by_phone(&self, phone: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.phone_number.as_deref() == Some(phone))
    }

    pub fn find_user_by_phone_mut(&mut self, phone: &str) -> Option<&mut User> {
        self.users
            .values_mut()
            .find(|u| u.phone_number.as_deref() == Some(phone))
    }

    // --- helper documents ---

    pub fn insert_document(&mut self, doc: HelperDocument) {
        self.documents.insert(doc.user_id, doc);
    }

    pub fn document_for(&self, user_id: Uuid) -> Result<&HelperDocument> {
        self.documents
            .get(&user_id)
            .ok_or_else(|| GiglinkError::NotFound("Document set not found".into()))
    }

    pub fn document_for_mut(&mut self, user_id: Uuid) -> Result<&mut HelperDocument> {
        self.documents
            .get_mut(&user_id)
            .ok_or_else(|| GiglinkError::NotFound("Document set not found".into()))
    }

    // --- jobs ---

    pub fn insert_job(&mut self, job: Job) {
        self.jobs.insert(job.id, job);
    }

    pub fn job(&self, id: Uuid) -> Result<&Job> {
        self.jobs
            .get(&id)
            .ok_or_else(|| GiglinkError::NotFound("Job not found".into()))
    }

    pub fn job_mut(&mut self, id: Uuid) -> Result<&mut Job> {
        self.jobs
            .get_mut(&id)
            .ok_or_else(|| GiglinkError::NotFound("Job not found".into()))
    }

    // --- applications ---

    pub fn insert_application(&mut self, application: JobApplication) {
        self.applications.insert(application.id, application);
    }

    pub fn application(&self, id: Uuid) -> Result<&JobApplication> {
        self.applications
            .get(&id)
            .ok_or_else(|| GiglinkError::NotFound("Application not found".into()))
    }

    pub fn applications_for_job(&self, job_id: Uuid) -> Vec<&JobApplication> {
        self.applications
            .values()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    pub fn applications_for_job_mut(&mut self, job_id: Uuid) -> Vec<&mut JobApplication> {
        self.applications
            .values_mut()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    pub fn application_mut(&mut self, id: Uuid) -> Result<&mut JobApplication> {
        self.applications
            .get_mut(&id)
            .ok_or_else(|| GiglinkError::NotFound("Application not found".into()))
    }

    pub fn find_application(&self, job_id: Uuid, helper_id: Uuid) -> Option<&JobApplication> {
        self.applications
            .values()
            .find(|a| a.job_id == job_id && a.helper_id == helper_id)
    }

    // --- reviews ---

    pub fn insert_review(&mut self, review: Review) {
        self.reviews.insert(review.id, review);
    }

    pub fn find_review(&self, reviewer_id: Uuid, reviewed_id: Uuid) -> Option<&Review> {
        self.reviews
            .values()
            .find(|r| r.reviewer_id == reviewer_id && r.reviewed_id == reviewed_id)
    }

    pub fn reviews_for(&self, reviewed_id: Uuid) -> Vec<&Review> {
        self.reviews
            .values()
            .filter(|r| r.reviewed_id == reviewed_id)
            .collect()
    }

    // --- wallets and transactions ---

    pub fn insert_wallet(&mut self, wallet: Wallet) {
        self.wallets.insert(wallet.user_id, wallet);
    }

    pub fn wallet_for(&self, user_id: Uuid) -> Result<&Wallet> {
        self.wallets
            .get(&user_id)
            .ok_or_else(|| GiglinkError::NotFound("Wallet not found".into()))
    }

    pub fn insert_transaction(&mut self, tx: Transaction) {
        self.transactions.insert(tx.id, tx);
    }

    pub fn transactions_for(&self, user_id: Uuid) -> Vec<&Transaction> {
        let Ok(wallet) = self.wallet_for(user_id) else {
            return Vec::new();
        };
        self.transactions
            .values()
            .filter(|t| t.wallet_id == wallet.id)
            .collect()
    }

    // --- notifications ---

    pub fn insert_notification(&mut self, notification: Notification) {
        self.notifications.insert(notification.id, notification);
    }

    pub fn notifications_for(&self, user_id: Uuid) -> Vec<&Notification> {
        let mut rows: Vec<_> = self
            .notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .collect();
        rows.sort_by_key(|n| n.created_at);
        rows
    }

    pub fn notifications_for_mut(&mut self, user_id: Uuid) -> Vec<&mut Notification> {
        self.notifications
            .values_mut()
            .filter(|n| n.user_id == user_id)
            .collect()
    }
}

/// Thread-safe store handle. One `write` call is one unit of work.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read-only closure against a consistent snapshot.
    pub fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        let tables = self.inner.read().map_err(|_| GiglinkError::StorePoisoned)?;
        Ok(f(&tables))
    }

    /// Run a mutating closure under the exclusive lock. Workflow
    /// operations check every precondition before touching a row, so a
    /// failing closure leaves the tables exactly as it found them.
    pub fn write<T>(&self, f: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut tables = self.inner.write().map_err(|_| GiglinkError::StorePoisoned)?;
        f(&mut tables)
    }
}
