use serde::Deserialize;

use super::collective::CollectivePage;
use super::expense::ExpensePage;
use super::transaction::TransactionPage;

/// `data` payload of the `home` query, one field per top-level selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub transactions: TransactionPage,
    pub recent: CollectivePage,
    pub active_spending: ExpensePage,
}
