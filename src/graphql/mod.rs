//! GraphQL access to the platform API.
//!
//! - `query`: the query documents the homepage depends on
//! - `binding`: per-page binding of the `home` query (`Loading` / `Ready`)
//! - `GraphqlClient`: HTTP transport, also the production [`HomeDataSource`]

pub mod binding;
pub mod error;
pub mod query;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::HomeData;

pub use binding::{HomeDataSource, QueryBinding, RemoteData};
pub use error::FetchError;
pub use query::{HOME_OPERATION, HOME_QUERY, LOGGED_IN_USER_OPERATION, LOGGED_IN_USER_QUERY};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    operation_name: &'a str,
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

/// Standard `{ data, errors }` response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

impl<T> GraphqlResponse<T> {
    /// Any reported error fails the whole operation, even alongside partial data.
    pub fn into_result(self, operation: &'static str) -> Result<T, FetchError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            log::warn!("GraphQL '{}' returned {} error(s): {}", operation, messages.len(), messages.join("; "));
            return Err(FetchError::Graphql(messages));
        }
        self.data.ok_or(FetchError::MissingData(operation))
    }
}

#[derive(Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation, optionally authenticated with a bearer token.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        access_token: Option<&str>,
    ) -> Result<T, FetchError> {
        let body = GraphqlRequest {
            operation_name: operation,
            query,
            variables: serde_json::json!({}),
        };
        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        log::debug!("GraphQL '{}' -> {}", operation, self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let envelope: GraphqlResponse<T> = response.json().await?;
        envelope.into_result(operation)
    }
}

impl HomeDataSource for GraphqlClient {
    fn fetch_home(&self) -> BoxFuture<'_, Result<HomeData, FetchError>> {
        Box::pin(self.execute::<HomeData>(HOME_OPERATION, HOME_QUERY, None))
    }
}
