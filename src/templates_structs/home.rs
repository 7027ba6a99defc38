use askama::Template;

use crate::models::{Collective, Transaction, TransactionKind, UserSlot};
use crate::views::format;

const CARD_DESCRIPTION_LEN: usize = 100;
// Collective stats have no currency of their own in the home query.
const STATS_CURRENCY: &str = "USD";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub header: HeaderContext,
    pub transactions: Vec<TransactionRow>,
    pub active_collectives: Vec<CollectiveCard>,
    pub recent_collectives: Vec<CollectiveCard>,
}

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub label: &'static str,
}

/// Per-request values the page chrome needs besides the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Target of the header's "Sign in" link.
    pub signin_url: String,
    /// Rendered into the sign-out form.
    pub csrf_token: String,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            signin_url: crate::config::DEFAULT_SIGNIN_URL.to_string(),
            csrf_token: String::new(),
        }
    }
}

/// Header state. `viewer_state` is one of `placeholder`, `anonymous`,
/// `signed-in` and is exposed as a data attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderContext {
    pub title: String,
    pub viewer_state: &'static str,
    pub viewer: Option<ViewerBadge>,
    pub signin_url: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerBadge {
    pub name: String,
    pub initial: String,
    pub image: Option<String>,
    pub profile_path: Option<String>,
}

impl HeaderContext {
    pub fn new(title: &str, user: &UserSlot, ctx: &PageContext) -> Self {
        let viewer_state = match user {
            UserSlot::Placeholder => "placeholder",
            UserSlot::Resolved(None) => "anonymous",
            UserSlot::Resolved(Some(_)) => "signed-in",
        };
        let viewer = user.user().map(|u| {
            let name = u.display_name();
            ViewerBadge {
                initial: format::initial(&name),
                name,
                image: u.image.clone(),
                profile_path: u.profile_path(),
            }
        });
        Self {
            title: title.to_string(),
            viewer_state,
            viewer,
            signin_url: ctx.signin_url.clone(),
            csrf_token: ctx.csrf_token.clone(),
        }
    }
}

/// One entry of the latest-transactions feed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: i64,
    pub from_name: String,
    pub from_slug: String,
    pub from_image: Option<String>,
    pub from_initial: String,
    pub verb: &'static str,
    pub amount: String,
    pub interval: String,
    pub host_name: Option<String>,
    pub host_slug: Option<String>,
    pub date: String,
    pub datetime: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let verb = match t.kind {
            TransactionKind::Credit => "contributed",
            TransactionKind::Debit => "spent",
        };
        let interval = t
            .subscription
            .as_ref()
            .and_then(|s| s.interval.as_deref());
        Self {
            id: t.id,
            from_name: t.from_collective.name.clone(),
            from_slug: t.from_collective.slug.clone(),
            from_image: t.from_collective.image.clone(),
            from_initial: format::initial(&t.from_collective.name),
            verb,
            amount: format::amount(t.amount.saturating_abs(), &t.currency),
            interval: format::interval_suffix(interval),
            host_name: t.host.as_ref().map(|h| h.name.clone()),
            host_slug: t.host.as_ref().map(|h| h.slug.clone()),
            date: format::short_date(&t.created_at),
            datetime: t.created_at.to_rfc3339(),
        }
    }
}

/// Stats card for a collective.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectiveCard {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub initial: String,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub description: String,
    pub backers: String,
    pub yearly_budget: String,
    pub balance: String,
}

impl From<&Collective> for CollectiveCard {
    fn from(c: &Collective) -> Self {
        Self {
            id: c.id,
            slug: c.slug.clone(),
            name: c.name.clone(),
            initial: format::initial(&c.name),
            image: c.image.clone(),
            background_image: c.background_image.clone(),
            description: c
                .description
                .as_deref()
                .map(|d| format::truncate(d, CARD_DESCRIPTION_LEN))
                .unwrap_or_default(),
            backers: format::pluralize(c.backer_count(), "backer", "backers"),
            yearly_budget: format::amount(c.yearly_budget(), STATS_CURRENCY),
            balance: format::amount(c.balance(), STATS_CURRENCY),
        }
    }
}
