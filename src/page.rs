//! Homepage controller.
//!
//! Owns the page's single piece of state, the viewer slot, and the page's
//! binding to the `home` query. The viewer lookup is started once, at mount,
//! on its own task and reported back through a one-shot channel, so state is
//! only ever written from [`PageController::settle_user`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;

use crate::auth::provider::LoggedInUserProvider;
use crate::errors::AppError;
use crate::graphql::{FetchError, QueryBinding, RemoteData};
use crate::models::{LoggedInUser, UserSlot};
use crate::templates_structs::PageContext;
use crate::views;

type UserUpdate = Result<Option<LoggedInUser>, FetchError>;

pub struct PageController {
    data: QueryBinding,
    user: UserSlot,
    ctx: PageContext,
    revision: u64,
    user_update: Option<oneshot::Receiver<UserUpdate>>,
    alive: Arc<AtomicBool>,
}

impl PageController {
    /// Mount the page. With a provider, the viewer lookup starts right away;
    /// without one the slot keeps its placeholder for the page's lifetime.
    pub fn mount(data: QueryBinding, provider: Option<Arc<dyn LoggedInUserProvider>>) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let user_update = provider.map(|p| spawn_user_fetch(p, Arc::clone(&alive)));
        Self {
            data,
            user: UserSlot::Placeholder,
            ctx: PageContext::default(),
            revision: 0,
            user_update,
            alive,
        }
    }

    /// Attach the request's page context (sign-in target, CSRF token).
    pub fn with_context(mut self, ctx: PageContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn user(&self) -> &UserSlot {
        &self.user
    }

    pub fn data(&self) -> &RemoteData {
        self.data.current()
    }

    /// Number of state transitions applied since mount.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render(&self) -> askama::Result<String> {
        views::render_home(self.data.current(), &self.user, &self.ctx)
    }

    /// Apply the viewer lookup result, if one is outstanding.
    ///
    /// Returns `Ok(true)` when the slot changed. Errors from the provider are
    /// passed through untouched.
    pub async fn settle_user(&mut self) -> Result<bool, FetchError> {
        let Some(rx) = self.user_update.take() else {
            return Ok(false);
        };
        let resolved = rx.await.map_err(|_| FetchError::Aborted)??;
        self.user = UserSlot::Resolved(resolved);
        self.revision += 1;
        Ok(true)
    }

    pub async fn settle_data(&mut self) -> Result<bool, FetchError> {
        let changed = self.data.resolve().await?;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    /// Wait for both the query and the viewer lookup, then render.
    pub async fn settle(&mut self) -> Result<String, AppError> {
        self.settle_data().await?;
        self.settle_user().await?;
        Ok(self.render()?)
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

fn spawn_user_fetch(
    provider: Arc<dyn LoggedInUserProvider>,
    alive: Arc<AtomicBool>,
) -> oneshot::Receiver<UserUpdate> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = provider.logged_in_user().await;
        if !alive.load(Ordering::Acquire) {
            log::debug!("Page dropped before viewer lookup finished, discarding result");
            return;
        }
        tx.send(result).ok();
    });
    rx
}
