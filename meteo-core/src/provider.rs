use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};
use tracing::debug;

use crate::error::TransportError;

pub mod forecast;
pub mod geocoding;

/// Outbound HTTP GET. The resolver only talks to the network through this,
/// so tests can substitute a canned implementation.
#[async_trait]
pub trait HttpFetch: Send + Sync + Debug {
    /// GET `url` with `query` and return the body of a 2xx response.
    /// `endpoint` names the call in errors and logs.
    async fn get(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: HttpFetch + ?Sized> HttpFetch for &T {
    async fn get(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, TransportError> {
        (**self).get(endpoint, url, query).await
    }
}

/// `reqwest` backed fetch.
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    http: Client,
}

impl ReqwestFetch {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| TransportError::Request { endpoint: "http client", source })?;

        Ok(Self { http })
    }
}

impl Default for ReqwestFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, TransportError> {
        debug!(endpoint, url, ?query, "sending request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| TransportError::Request { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| TransportError::Request { endpoint, source })?;

        if !status.is_success() {
            return Err(TransportError::Status { endpoint, status, body: truncate_body(&body) });
        }

        debug!(endpoint, %status, bytes = body.len(), "response received");
        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(500);
        let out = truncate_body(&body);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert_eq!(out.trim_end_matches("...").chars().count(), 100);
    }
}
