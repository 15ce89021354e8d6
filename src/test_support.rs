//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::recommend::{RecommendError, RecommendationService};

/// A no-op service for tests that don't need real API calls.
pub struct NoopService;

#[async_trait]
impl RecommendationService for NoopService {
    fn name(&self) -> &str {
        "noop"
    }

    async fn recommend(&self, _prompt: &str) -> Result<Vec<String>, RecommendError> {
        Ok(Vec::new())
    }
}

/// Answers every prompt with the same fixed list.
pub struct FixedService(pub Vec<String>);

#[async_trait]
impl RecommendationService for FixedService {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn recommend(&self, _prompt: &str) -> Result<Vec<String>, RecommendError> {
        Ok(self.0.clone())
    }
}

/// Fails every call with the given error.
pub struct FailingService(pub RecommendError);

#[async_trait]
impl RecommendationService for FailingService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn recommend(&self, _prompt: &str) -> Result<Vec<String>, RecommendError> {
        Err(self.0.clone())
    }
}

/// Creates a test App with a NoopService.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopService))
}

pub fn movies(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}
