use serde::Deserialize;

use super::collective::Collective;

/// A paid expense. Only its collective is read by the homepage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Expense {
    pub collective: Collective,
}

/// `activeSpending` slice: `{ expenses: [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpensePage {
    #[serde(default)]
    pub expenses: Vec<Expense>,
}
