pub mod http;
pub mod service;
pub mod types;

pub use http::HttpRecommender;
pub use service::{RecommendError, RecommendationService, FETCH_FAILED_MESSAGE};
pub use types::{RecommendRequest, RecommendResponse};
