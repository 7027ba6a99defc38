use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::oneshot;

use super::error::FetchError;
use crate::models::HomeData;

/// Executes the `home` query. Implemented by [`super::GraphqlClient`]; tests
/// and alternative backends plug in their own.
pub trait HomeDataSource: Send + Sync {
    fn fetch_home(&self) -> BoxFuture<'_, Result<HomeData, FetchError>>;
}

/// Result of the `home` query as seen by the page.
///
/// The three slices only exist once the whole query resolved, so there is no
/// way to reach them while `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData {
    Loading,
    Ready(Arc<HomeData>),
}

impl RemoteData {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }
}

/// One page load's binding to the `home` query.
pub struct QueryBinding {
    state: RemoteData,
    pending: Option<oneshot::Receiver<Result<HomeData, FetchError>>>,
}

impl QueryBinding {
    /// Start the query once on a background task. The binding stays `Loading`
    /// until [`QueryBinding::resolve`] observes the result.
    pub fn bind(source: Arc<dyn HomeDataSource>) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = source.fetch_home().await;
            // Receiver gone means the page was dropped; nothing to deliver.
            tx.send(result).ok();
        });
        Self { state: RemoteData::Loading, pending: Some(rx) }
    }

    /// A binding whose data is already in hand.
    pub fn ready(data: HomeData) -> Self {
        Self { state: RemoteData::Ready(Arc::new(data)), pending: None }
    }

    pub fn current(&self) -> &RemoteData {
        &self.state
    }

    /// Wait for the query. Returns `true` if this call moved the binding from
    /// `Loading` to `Ready`, `false` if it was already settled.
    pub async fn resolve(&mut self) -> Result<bool, FetchError> {
        let Some(rx) = self.pending.take() else {
            return Ok(false);
        };
        let data = rx.await.map_err(|_| FetchError::Aborted)??;
        self.state = RemoteData::Ready(Arc::new(data));
        Ok(true)
    }
}
