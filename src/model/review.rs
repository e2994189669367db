use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's rating of another; unique per (reviewer, reviewed) pair
/// and not revisable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewed_id: Uuid,
    /// Always within 1..=5; enforced at submission.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        reviewer_id: Uuid,
        reviewed_id: Uuid,
        rating: u8,
        comment: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reviewer_id,
            reviewed_id,
            rating,
            comment,
            created_at: now,
        }
    }
}

/// Aggregate rating view for a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub avg_rating: f64,
    pub review_count: usize,
}
