//! HTTP client for the remote recommendation service.
//!
//! One `POST <base_url><path>` with a JSON body of `{"prompt": ...}` per call.
//! No retries and no timeout: the call settles when the server (or the
//! network) says so.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{RecommendError, RecommendationService};
use super::types::{RecommendRequest, RecommendResponse};

/// Join a base URL and a path without doubling or dropping the slash.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

pub struct HttpRecommender {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRecommender {
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            endpoint: join_endpoint(base_url, path),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationService for HttpRecommender {
    fn name(&self) -> &str {
        "http"
    }

    async fn recommend(&self, prompt: &str) -> Result<Vec<String>, RecommendError> {
        info!(
            "Recommendation request: endpoint={}, prompt_len={}",
            self.endpoint,
            prompt.len()
        );

        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecommendRequest { prompt })
            .send()
            .await
            .map_err(|e| RecommendError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Recommendation response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Recommendation service error: {} - {}", status, err_body);
            return Err(RecommendError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecommendError::Network(e.to_string()))?;

        let parsed: RecommendResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse recommendation body: {}", e);
            RecommendError::Parse(e.to_string())
        })?;

        info!("Received {} recommendations", parsed.movies.len());
        Ok(parsed.movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint_handles_slashes() {
        assert_eq!(
            join_endpoint("https://example.com", "/api/recommend"),
            "https://example.com/api/recommend"
        );
        assert_eq!(
            join_endpoint("https://example.com/", "/recommend"),
            "https://example.com/recommend"
        );
        assert_eq!(
            join_endpoint("https://example.com/", "recommend"),
            "https://example.com/recommend"
        );
        assert_eq!(join_endpoint("https://example.com/", ""), "https://example.com");
    }

    #[test]
    fn test_new_builds_endpoint() {
        let client = HttpRecommender::new("http://localhost:8000", "/api/recommend");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/recommend");
        assert_eq!(client.name(), "http");
    }
}
