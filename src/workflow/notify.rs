//! Notification emission: the write-only side channel lifecycle
//! transitions use to tell participants what happened.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::Notification;
use crate::store::Tables;
use crate::workflow::lifecycle::ActorSide;

/// Append an unread notification for `user_id`.
pub fn emit(tables: &mut Tables, user_id: Uuid, message: String, now: DateTime<Utc>) {
    tables.insert_notification(Notification::new(user_id, message, now));
}

pub fn assigned_message(title: &str) -> String {
    format!("You've been assigned to the job '{title}'!")
}

pub fn completed_message(title: &str, completed_by: ActorSide) -> String {
    let role = match completed_by {
        ActorSide::Poster => "job poster",
        ActorSide::Helper => "helper",
    };
    format!("Job '{title}' has been marked as complete by the {role}")
}

pub fn cancelled_message(title: &str) -> String {
    format!("Job '{title}' has been cancelled by the job poster")
}

/// Mark every unread notification for `user_id` as read; returns how
/// many were flipped.
pub fn mark_all_read(tables: &mut Tables, user_id: Uuid) -> usize {
    let mut count = 0;
    for notification in tables.notifications_for_mut(user_id) {
        if !notification.is_read {
            notification.is_read = true;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_appends_unread() {
        let mut tables = Tables::default();
        let user = Uuid::new_v4();
        emit(&mut tables, user, "hello".into(), Utc::now());

        let inbox = tables.notifications_for(user);
        assert_eq!(inbox.len(), 1);
        assert!(!inbox[0].is_read);
    }

    #[test]
    fn completion_message_names_the_role() {
        assert_eq!(
            completed_message("Fix sink", ActorSide::Helper),
            "Job 'Fix sink' has been marked as complete by the helper"
        );
        assert_eq!(
            completed_message("Fix sink", ActorSide::Poster),
            "Job 'Fix sink' has been marked as complete by the job poster"
        );
    }

    #[test]
    fn mark_all_read_counts_only_unread() {
        let mut tables = Tables::default();
        let user = Uuid::new_v4();
        let now = Utc::now();
        emit(&mut tables, user, "one".into(), now);
        emit(&mut tables, user, "two".into(), now);
        emit(&mut tables, Uuid::new_v4(), "someone else's".into(), now);

        assert_eq!(mark_all_read(&mut tables, user), 2);
        assert_eq!(mark_all_read(&mut tables, user), 0);
        assert!(tables.notifications_for(user).iter().all(|n| n.is_read));
    }
}
