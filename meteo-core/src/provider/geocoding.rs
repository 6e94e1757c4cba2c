//! City name → coordinates.

use serde::Deserialize;

use crate::{error::TransportError, locale::Language, model::Place};

use super::HttpFetch;

pub const ENDPOINT: &str = "geocoding";

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<Place>>,
}

fn query(name: &str, lang: Language) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("count", "1".to_string()),
        ("language", lang.as_str().to_string()),
        ("format", "json".to_string()),
    ]
}

/// First candidate for `name`, or `None` when the service knows no such place.
pub async fn search<F: HttpFetch>(
    fetch: &F,
    url: &str,
    name: &str,
    lang: Language,
) -> Result<Option<Place>, TransportError> {
    let body = fetch.get(ENDPOINT, url, &query(name, lang)).await?;
    parse(&body)
}

fn parse(body: &str) -> Result<Option<Place>, TransportError> {
    let parsed: GeoResponse =
        serde_json::from_str(body).map_err(|e| TransportError::payload(ENDPOINT, e.to_string()))?;

    Ok(parsed.results.and_then(|r| r.into_iter().next()))
}
