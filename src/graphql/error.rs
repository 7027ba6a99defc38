use std::fmt;

/// Failure while executing a GraphQL operation against the API.
#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status(u16),
    Graphql(Vec<String>),
    MissingData(&'static str),
    /// The task running the fetch went away before reporting a result.
    Aborted,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {e}"),
            FetchError::Status(code) => write!(f, "API responded with status {code}"),
            FetchError::Graphql(messages) => write!(f, "GraphQL errors: {}", messages.join("; ")),
            FetchError::MissingData(op) => write!(f, "No data in response to '{op}'"),
            FetchError::Aborted => write!(f, "Fetch task aborted"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e)
    }
}
