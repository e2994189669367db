//! Review submission: one rating per (reviewer, reviewed) pair.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{GiglinkError, Result};
use crate::model::Review;
use crate::store::Tables;

/// Submit a review of `reviewed_id` by `reviewer_id`. Rating must be
/// within 1..=5; a pair that already reviewed stays as written (no
/// update path).
pub fn submit_review(
    tables: &mut Tables,
    reviewer_id: Uuid,
    reviewed_id: Uuid,
    rating: u8,
    comment: String,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    if !(1..=5).contains(&rating) {
        return Err(GiglinkError::Validation(
            "Rating must be between 1 and 5".into(),
        ));
    }
    tables.user(reviewer_id)?;
    tables.user(reviewed_id)?;
    if tables.find_review(reviewer_id, reviewed_id).is_some() {
        return Err(GiglinkError::Conflict(
            "You have already reviewed this user".into(),
        ));
    }

    let review = Review::new(reviewer_id, reviewed_id, rating, comment, now);
    let id = review.id;
    tables.insert_review(review);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, User};

    fn two_users(tables: &mut Tables) -> (Uuid, Uuid) {
        let a = User::new("ada".into(), Role::Poster, None, Utc::now());
        let b = User::new("ben".into(), Role::Helper, None, Utc::now());
        let (ida, idb) = (a.id, b.id);
        tables.insert_user(a);
        tables.insert_user(b);
        (ida, idb)
    }

    #[test]
    fn rating_bounds_are_enforced() {
        let mut tables = Tables::default();
        let (a, b) = two_users(&mut tables);

        for bad in [0u8, 6] {
            let err = submit_review(&mut tables, a, b, bad, "x".into(), Utc::now()).unwrap_err();
            assert!(matches!(err, GiglinkError::Validation(_)));
        }
        submit_review(&mut tables, a, b, 1, "rough".into(), Utc::now()).unwrap();
    }

    #[test]
    fn one_review_per_pair_but_directions_are_independent() {
        let mut tables = Tables::default();
        let (a, b) = two_users(&mut tables);

        submit_review(&mut tables, a, b, 4, "fine".into(), Utc::now()).unwrap();
        let err = submit_review(&mut tables, a, b, 5, "again".into(), Utc::now()).unwrap_err();
        assert!(matches!(err, GiglinkError::Conflict(_)));

        // The reverse direction is a different pair.
        submit_review(&mut tables, b, a, 5, "paid fast".into(), Utc::now()).unwrap();
    }

    #[test]
    fn reviewing_a_ghost_is_not_found() {
        let mut tables = Tables::default();
        let (a, _) = two_users(&mut tables);
        let err =
            submit_review(&mut tables, a, Uuid::new_v4(), 3, "?".into(), Utc::now()).unwrap_err();
        assert!(matches!(err, GiglinkError::NotFound(_)));
    }
}
