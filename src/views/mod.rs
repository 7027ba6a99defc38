//! Homepage rendering: a pure function of the query state, the viewer slot
//! and the request's page context.

pub mod format;

use std::collections::HashSet;

use askama::Template;

use crate::graphql::RemoteData;
use crate::models::{Collective, Expense, HomeData, UserSlot};
use crate::templates_structs::{
    CollectiveCard, HeaderContext, HomeTemplate, LoadingTemplate, PageContext, TransactionRow,
};

/// How many collectives the "Most active spending" row shows.
pub const ACTIVE_COLLECTIVES_LIMIT: usize = 4;

pub const PAGE_TITLE: &str = "Home";

/// Collectives behind the given expenses, first occurrence of each slug kept,
/// capped at [`ACTIVE_COLLECTIVES_LIMIT`]. Dedup runs over the whole list
/// before the cap is applied.
pub fn active_collectives(expenses: &[Expense]) -> Vec<&Collective> {
    let mut seen = HashSet::new();
    expenses
        .iter()
        .map(|e| &e.collective)
        .filter(|c| seen.insert(c.slug.as_str()))
        .take(ACTIVE_COLLECTIVES_LIMIT)
        .collect()
}

pub fn home_template(data: &HomeData, user: &UserSlot, ctx: &PageContext) -> HomeTemplate {
    HomeTemplate {
        header: HeaderContext::new(PAGE_TITLE, user, ctx),
        transactions: data.transactions.transactions.iter().map(TransactionRow::from).collect(),
        active_collectives: active_collectives(&data.active_spending.expenses)
            .into_iter()
            .map(CollectiveCard::from)
            .collect(),
        recent_collectives: data.recent.collectives.iter().map(CollectiveCard::from).collect(),
    }
}

/// Render the page for the current state. While loading, only the loading
/// indicator is produced.
pub fn render_home(data: &RemoteData, user: &UserSlot, ctx: &PageContext) -> askama::Result<String> {
    match data {
        RemoteData::Loading => LoadingTemplate { label: "loading..." }.render(),
        RemoteData::Ready(home) => home_template(home, user, ctx).render(),
    }
}
