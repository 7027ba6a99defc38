//! Shared test infrastructure for page, view, and handler tests.
//!
//! - Fixture builders for collectives, expenses, transactions, `HomeData`
//! - Stub collaborators: `StaticSource`, `FailingSource`, `StubUserProvider`,
//!   `FailingUserProvider`, `StubUserFactory`
//! - Markup helpers: `list_keys()`, `count_items()`, `csrf_token_in()`
//! - Log capture: `capture_logs()`
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::web;
use chrono::{TimeZone, Utc};
use futures::future::BoxFuture;
use regex::Regex;

use collective_home::auth::provider::{LoggedInUserProvider, UserProviderFactory};
use collective_home::config::AppConfig;
use collective_home::graphql::{FetchError, HomeDataSource};
use collective_home::models::*;

// ============================================================================
// FIXTURES
// ============================================================================

pub fn collective(id: i64, slug: &str) -> Collective {
    Collective {
        id,
        kind: "COLLECTIVE".to_string(),
        slug: slug.to_string(),
        name: format!("Collective {slug}"),
        description: Some(format!("We are {slug}")),
        stats: Some(CollectiveStats {
            id: id * 10,
            balance: Some(1_000),
            yearly_budget: Some(250_000),
            backers: Some(Backers { users: Some(4), organizations: Some(1) }),
        }),
        ..Default::default()
    }
}

pub fn expense(id: i64, slug: &str) -> Expense {
    Expense { collective: collective(id, slug) }
}

pub fn transaction(id: i64, from: &str, amount: i64) -> Transaction {
    Transaction {
        id,
        amount,
        currency: "USD".to_string(),
        created_at: Utc.with_ymd_and_hms(2018, 3, 2, 10, 15, 0).unwrap(),
        kind: if amount < 0 { TransactionKind::Debit } else { TransactionKind::Credit },
        from_collective: TransactionParty {
            id: id + 1000,
            image: None,
            name: from.to_string(),
            slug: from.to_lowercase(),
        },
        host: Some(TransactionHost {
            name: "Open Source Collective".to_string(),
            slug: "opensource".to_string(),
        }),
        subscription: None,
    }
}

pub fn home_data(
    transactions: Vec<Transaction>,
    recent: Vec<Collective>,
    expenses: Vec<Expense>,
) -> HomeData {
    HomeData {
        transactions: TransactionPage { transactions },
        recent: CollectivePage { collectives: recent },
        active_spending: ExpensePage { expenses },
    }
}

pub fn empty_home() -> HomeData {
    home_data(vec![], vec![], vec![])
}

pub fn sample_home() -> HomeData {
    home_data(
        vec![transaction(3, "Jane", 5_000), transaction(1, "Webpack", -1_299), transaction(2, "Bob", 1_000)],
        vec![collective(21, "fresh"), collective(22, "newer")],
        vec![expense(11, "vue"), expense(12, "vue"), expense(13, "babel")],
    )
}

pub fn alice() -> LoggedInUser {
    LoggedInUser {
        id: 99,
        username: Some("alice".to_string()),
        first_name: Some("Alice".to_string()),
        ..Default::default()
    }
}

/// A full `home` response as the API sends it.
pub const HOME_RESPONSE_JSON: &str = r#"{
  "data": {
    "transactions": {
      "transactions": [
        {
          "amount": 2000, "createdAt": "2018-03-05T09:00:00.000Z", "currency": "USD", "id": 501, "type": "CREDIT",
          "fromCollective": { "id": 1, "image": null, "name": "Jane Doe", "slug": "jane" },
          "host": { "name": "Open Source Collective", "slug": "opensource" },
          "subscription": { "interval": "month" }
        },
        {
          "amount": -4500, "createdAt": "2018-03-04T09:00:00.000Z", "currency": "EUR", "id": 500, "type": "DEBIT",
          "fromCollective": { "id": 2, "image": "https://img.example/vue.png", "name": "Vue.js", "slug": "vuejs" },
          "host": null
        }
      ]
    },
    "recent": {
      "collectives": [
        {
          "id": 31, "type": "COLLECTIVE", "slug": "new-one", "name": "New One", "image": null,
          "backgroundImage": null, "description": "Brand new", "settings": { "style": {} },
          "stats": { "id": 310, "balance": 0, "yearlyBudget": 0, "backers": { "users": 0, "organizations": 0 } }
        }
      ]
    },
    "activeSpending": {
      "expenses": [
        { "collective": { "id": 41, "type": "COLLECTIVE", "slug": "webpack", "name": "webpack", "image": null,
          "backgroundImage": null, "description": null, "settings": {},
          "stats": { "id": 410, "balance": 1200000, "yearlyBudget": 30000000, "backers": { "users": 120, "organizations": 14 } } } },
        { "collective": { "id": 41, "type": "COLLECTIVE", "slug": "webpack", "name": "webpack", "image": null,
          "backgroundImage": null, "description": null, "settings": {},
          "stats": { "id": 410, "balance": 1200000, "yearlyBudget": 30000000, "backers": { "users": 120, "organizations": 14 } } } },
        { "collective": { "id": 42, "type": "COLLECTIVE", "slug": "babel", "name": "Babel", "image": null,
          "backgroundImage": null, "description": "Compiler", "settings": null, "stats": null } }
      ]
    }
  }
}"#;

// ============================================================================
// STUB COLLABORATORS
// ============================================================================

pub struct StaticSource(pub HomeData);

impl HomeDataSource for StaticSource {
    fn fetch_home(&self) -> BoxFuture<'_, Result<HomeData, FetchError>> {
        Box::pin(async move { Ok(self.0.clone()) })
    }
}

pub struct FailingSource;

impl HomeDataSource for FailingSource {
    fn fetch_home(&self) -> BoxFuture<'_, Result<HomeData, FetchError>> {
        Box::pin(async { Err(FetchError::Status(502)) })
    }
}

/// Resolves to a fixed viewer after `delay`, counting calls.
pub struct StubUserProvider {
    user: Option<LoggedInUser>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubUserProvider {
    pub fn resolving(user: Option<LoggedInUser>, delay: Duration) -> Self {
        Self { user, delay, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoggedInUserProvider for StubUserProvider {
    fn logged_in_user(&self) -> BoxFuture<'_, Result<Option<LoggedInUser>, FetchError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(self.user.clone())
        })
    }
}

pub struct FailingUserProvider;

impl LoggedInUserProvider for FailingUserProvider {
    fn logged_in_user(&self) -> BoxFuture<'_, Result<Option<LoggedInUser>, FetchError>> {
        Box::pin(async { Err(FetchError::Status(401)) })
    }
}

/// Hands out `StubUserProvider`s and remembers the last token it saw.
pub struct StubUserFactory {
    pub user: Option<LoggedInUser>,
    pub last_token: Mutex<Option<String>>,
}

impl StubUserFactory {
    pub fn new(user: Option<LoggedInUser>) -> Self {
        Self { user, last_token: Mutex::new(None) }
    }
}

impl UserProviderFactory for StubUserFactory {
    fn for_token(&self, access_token: String) -> Arc<dyn LoggedInUserProvider> {
        *self.last_token.lock().unwrap() = Some(access_token);
        Arc::new(StubUserProvider::resolving(self.user.clone(), Duration::from_millis(1)))
    }
}

pub fn source_data(source: impl HomeDataSource + 'static) -> web::Data<dyn HomeDataSource> {
    web::Data::from(Arc::new(source) as Arc<dyn HomeDataSource>)
}

pub fn factory_data(factory: Arc<StubUserFactory>) -> web::Data<dyn UserProviderFactory> {
    web::Data::from(factory as Arc<dyn UserProviderFactory>)
}

/// Configuration with every variable unset.
pub fn config_data() -> web::Data<AppConfig> {
    web::Data::new(AppConfig::from_lookup(|_| None))
}

// ============================================================================
// MARKUP HELPERS
// ============================================================================

/// `data-key` values inside `<ul id="{list_id}">`, in document order.
/// Panics if the list is missing from the markup.
pub fn list_keys(html: &str, list_id: &str) -> Vec<String> {
    let list = Regex::new(&format!(r#"(?s)<ul[^>]*id="{}"[^>]*>(.*?)</ul>"#, regex::escape(list_id)))
        .unwrap();
    let inner = list
        .captures(html)
        .unwrap_or_else(|| panic!("list #{list_id} missing from markup"))
        .get(1)
        .unwrap()
        .as_str();
    let key = Regex::new(r#"data-key="([^"]*)""#).unwrap();
    key.captures_iter(inner).map(|c| c[1].to_string()).collect()
}

pub fn count_items(html: &str, list_id: &str) -> usize {
    list_keys(html, list_id).len()
}

/// Value of the first hidden `csrf_token` field in the markup.
pub fn csrf_token_in(html: &str) -> String {
    let field = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    field
        .captures(html)
        .expect("csrf_token field missing from markup")[1]
        .to_string()
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

/// Records every `log` record emitted in the test binary.
pub struct LogCapture {
    lines: Mutex<Vec<String>>,
}

impl log::Log for LogCapture {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let line = format!("{} {}: {}", record.level(), record.target(), record.args());
        self.lines.lock().unwrap().push(line);
    }

    fn flush(&self) {}
}

impl LogCapture {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    /// Poll until a line containing `needle` shows up or `timeout` passes.
    pub async fn wait_for(&self, needle: &str, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if self.contains(needle) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.contains(needle)
    }
}

static CAPTURE: LogCapture = LogCapture { lines: Mutex::new(Vec::new()) };

/// Install the capturing logger (once per test binary) at trace level.
pub fn capture_logs() -> &'static LogCapture {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(log::LevelFilter::Trace);
    &CAPTURE
}
