use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A ledger entry shown in the "Latest Transactions" feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub amount: i64, // cents, signed
    pub currency: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub from_collective: TransactionParty,
    pub host: Option<TransactionHost>,
    /// Only present on order transactions.
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    #[default]
    Credit,
    Debit,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionParty {
    pub id: i64,
    pub image: Option<String>,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionHost {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Subscription {
    pub interval: Option<String>, // "month" | "year"
}

/// `transactions` slice: `{ transactions: [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
