use reqwest::StatusCode;
use thiserror::Error;

/// Why a resolution produced no summary. Every variant is terminal.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("City name is empty")]
    EmptyInput,

    #[error("City not found: \"{0}\"")]
    PlaceNotFound(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A network call failed or answered with something unusable.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed {endpoint} payload: {reason}")]
    Payload {
        endpoint: &'static str,
        reason: String,
    },
}

impl TransportError {
    pub(crate) fn payload(endpoint: &'static str, reason: impl Into<String>) -> Self {
        TransportError::Payload { endpoint, reason: reason.into() }
    }
}
