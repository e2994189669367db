//! Registration and profile-side reads.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{GiglinkError, Result};
use crate::model::{HelperDocument, RatingSummary, Role, User, Wallet};
use crate::store::Tables;

/// Register a new user.
///
/// Provisions the user row, a zero-balance wallet, and for helpers an
/// empty pending document set, all under the caller's transaction.
pub fn register(
    tables: &mut Tables,
    username: String,
    role: Role,
    phone_number: Option<String>,
    kyc_details: Option<serde_json::Value>,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    if username.trim().is_empty() {
        return Err(GiglinkError::Validation("Username is required".into()));
    }
    if tables.find_user_by_username(&username).is_some() {
        return Err(GiglinkError::Conflict("Username already taken".into()));
    }

    let mut user = User::new(username, role, phone_number, now);
    user.kyc_details = kyc_details;
    let id = user.id;
    tables.insert_user(user);
    tables.insert_wallet(Wallet::new(id, now));
    if role == Role::Helper {
        tables.insert_document(HelperDocument::new(id, now));
    }
    Ok(id)
}

/// Average rating and review count for a user; zeroes when unreviewed.
pub fn rating_summary(tables: &Tables, user_id: Uuid) -> Result<RatingSummary> {
    tables.user(user_id)?;
    let reviews = tables.reviews_for(user_id);
    let count = reviews.len();
    let avg = if count == 0 {
        0.0
    } else {
        reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / count as f64
    };
    Ok(RatingSummary {
        avg_rating: avg,
        review_count: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentStatus;
    use crate::workflow::reviews;

    #[test]
    fn register_provisions_wallet_and_documents() {
        let mut tables = Tables::default();
        let now = Utc::now();
        let helper = register(
            &mut tables,
            "hana".into(),
            Role::Helper,
            Some("+31".into()),
            Some(serde_json::json!({"id_no": "X12"})),
            now,
        )
        .unwrap();

        assert_eq!(tables.wallet_for(helper).unwrap().balance, 0);
        assert_eq!(
            tables.document_for(helper).unwrap().status,
            DocumentStatus::Pending
        );
        assert!(tables.user(helper).unwrap().kyc_details.is_some());
    }

    #[test]
    fn posters_get_no_document_set() {
        let mut tables = Tables::default();
        let poster = register(&mut tables, "pim".into(), Role::Poster, None, None, Utc::now())
            .unwrap();
        assert!(tables.wallet_for(poster).is_ok());
        assert!(tables.document_for(poster).is_err());
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let mut tables = Tables::default();
        register(&mut tables, "sam".into(), Role::Poster, None, None, Utc::now()).unwrap();
        let err = register(&mut tables, "sam".into(), Role::Helper, None, None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, GiglinkError::Conflict(_)));
    }

    #[test]
    fn rating_summary_averages_reviews() {
        let mut tables = Tables::default();
        let now = Utc::now();
        let reviewed = register(&mut tables, "r1".into(), Role::Helper, None, None, now).unwrap();
        let a = register(&mut tables, "a".into(), Role::Poster, None, None, now).unwrap();
        let b = register(&mut tables, "b".into(), Role::Poster, None, None, now).unwrap();

        assert_eq!(
            rating_summary(&tables, reviewed).unwrap(),
            RatingSummary {
                avg_rating: 0.0,
                review_count: 0
            }
        );

        reviews::submit_review(&mut tables, a, reviewed, 5, "Great".into(), now).unwrap();
        reviews::submit_review(&mut tables, b, reviewed, 4, "Good".into(), now).unwrap();

        let summary = rating_summary(&tables, reviewed).unwrap();
        assert_eq!(summary.review_count, 2);
        assert!((summary.avg_rating - 4.5).abs() < f64::EPSILON);
    }
}
