use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One wallet per user, provisioned at registration.
///
/// The balance is a stored figure, not derived from the transaction
/// log, and no workflow operation moves money. Settlement lives
/// outside this crate; the ledger here is read-only bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Integer minor units (cents).
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            balance: 0,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionReason {
    JobPayment,
    Withdrawal,
    Deposit,
    Refund,
    Other,
}

/// Append-only ledger entry attached to a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub wallet_id: Uuid,
    pub kind: TransactionType,
    pub amount: i64,
    pub reason: TransactionReason,
    pub created_at: DateTime<Utc>,
}
