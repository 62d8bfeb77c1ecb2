//! Error types shared by the REST storage implementation.

use reqwest::StatusCode;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`RestDaoError`] failures.
pub type RestResult<T> = Result<T, RestDaoError>;

/// Failures that can occur while talking to the hosted store.
#[derive(Debug, Error)]
pub enum RestDaoError {
    /// Required environment variable is missing.
    #[error("missing store environment variable `{var}`")]
    MissingEnvVar { var: &'static str },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build store HTTP client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request to a store endpoint could not be sent.
    #[error("failed to send store request to `{path}`")]
    RequestSend {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The store returned an unexpected status code.
    #[error("unexpected store response status {status} for `{path}`")]
    RequestStatus { path: String, status: StatusCode },
    /// Response payload could not be parsed into JSON.
    #[error("failed to decode store response for `{path}`")]
    DecodeResponse {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<RestDaoError> for StorageError {
    fn from(err: RestDaoError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}
