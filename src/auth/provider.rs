use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::graphql::{FetchError, GraphqlClient, LOGGED_IN_USER_OPERATION, LOGGED_IN_USER_QUERY};
use crate::models::LoggedInUser;

/// The "get logged-in user" capability handed to a page.
///
/// `Ok(None)` means the lookup succeeded but there is nobody signed in
/// (expired or revoked token).
pub trait LoggedInUserProvider: Send + Sync {
    fn logged_in_user(&self) -> BoxFuture<'_, Result<Option<LoggedInUser>, FetchError>>;
}

/// Builds the capability for a viewer that presented an access token.
pub trait UserProviderFactory: Send + Sync {
    fn for_token(&self, access_token: String) -> Arc<dyn LoggedInUserProvider>;
}

#[derive(Deserialize)]
struct LoggedInUserData {
    #[serde(rename = "LoggedInUser")]
    logged_in_user: Option<LoggedInUser>,
}

/// Resolves the viewer by running `LoggedInUser` with their bearer token.
pub struct GraphqlUserProvider {
    client: GraphqlClient,
    access_token: String,
}

impl GraphqlUserProvider {
    pub fn new(client: GraphqlClient, access_token: String) -> Self {
        Self { client, access_token }
    }
}

impl LoggedInUserProvider for GraphqlUserProvider {
    fn logged_in_user(&self) -> BoxFuture<'_, Result<Option<LoggedInUser>, FetchError>> {
        Box::pin(async move {
            let data: LoggedInUserData = self
                .client
                .execute(LOGGED_IN_USER_OPERATION, LOGGED_IN_USER_QUERY, Some(&self.access_token))
                .await?;
            Ok(data.logged_in_user)
        })
    }
}

impl UserProviderFactory for GraphqlClient {
    fn for_token(&self, access_token: String) -> Arc<dyn LoggedInUserProvider> {
        Arc::new(GraphqlUserProvider::new(self.clone(), access_token))
    }
}
