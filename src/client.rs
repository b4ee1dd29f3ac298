//! Recommendation backend client
//!
//! One POST per submit: the preference draft goes out as a JSON body and a
//! JSON array of movies comes back. Transport failures and non-2xx statuses
//! are reported uniformly as fetch errors; there is no retry, no timeout
//! and no caching.

use reqwest::blocking::Client as HttpClient;

use crate::error::{ReelGuideError, ReelGuideResult};
use crate::models::{Movie, PreferenceDraft};

/// Client for the `/api/recommendations` endpoint
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http_client: HttpClient,
    endpoint: String,
}

impl RecommendationClient {
    /// Create a client pointed at the full recommendations URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch recommendations for the given draft
    pub fn fetch(&self, draft: &PreferenceDraft) -> ReelGuideResult<Vec<Movie>> {
        let response = self.http_client.post(&self.endpoint).json(draft).send()?;

        if !response.status().is_success() {
            return Err(ReelGuideError::Fetch(format!(
                "server returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let movies = response.json::<Vec<Movie>>()?;
        Ok(movies)
    }
}

/// Decode a recommendations response body
///
/// Split out of [`RecommendationClient::fetch`] so the wire format can be
/// exercised without a live server.
pub fn parse_movies(body: &str) -> ReelGuideResult<Vec<Movie>> {
    serde_json::from_str(body).map_err(|e| ReelGuideError::Fetch(e.to_string()))
}
