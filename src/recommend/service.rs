use std::fmt;

use async_trait::async_trait;

/// Shown for any non-success HTTP status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations";

/// A failed recommendation fetch. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// Connection-level failure (DNS, refused, reset). Carries the underlying message.
    Network(String),
    /// The service answered with a non-success status.
    Status(u16),
    /// The body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendError::Network(msg) => write!(f, "{msg}"),
            RecommendError::Status(_) => f.write_str(FETCH_FAILED_MESSAGE),
            RecommendError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecommendError {}

#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Short name for logs and the title bar.
    fn name(&self) -> &str;

    /// Fetch titles for a free-text preference. Order is preserved.
    async fn recommend(&self, prompt: &str) -> Result<Vec<String>, RecommendError>;
}
