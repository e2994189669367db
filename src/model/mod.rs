mod application;
mod document;
mod job;
mod notification;
mod review;
mod user;
mod wallet;

pub use application::{ApplicationStatus, JobApplication};
pub use document::{DocumentStatus, DocumentUpload, HelperDocument};
pub use job::{Category, Job, JobDraft, JobStatus, JobType, Location};
pub use notification::Notification;
pub use review::{RatingSummary, Review};
pub use user::{OtpChallenge, Role, User};
pub use wallet::{Transaction, TransactionReason, TransactionType, Wallet};
