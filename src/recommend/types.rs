//! Wire types for the recommendation endpoint.

use serde::{Deserialize, Serialize};

/// Request body. Exactly one field goes over the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecommendRequest<'a> {
    pub prompt: &'a str,
}

/// Response body. A missing `movies` field reads as an empty list.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RecommendResponse {
    #[serde(default)]
    pub movies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_has_only_prompt() {
        let body = serde_json::to_value(RecommendRequest { prompt: "sci-fi" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "sci-fi" }));
    }

    #[test]
    fn test_response_preserves_order() {
        let parsed: RecommendResponse =
            serde_json::from_str(r#"{"movies": ["Alien", "Arrival", "Solaris"]}"#).unwrap();
        assert_eq!(parsed.movies, vec!["Alien", "Arrival", "Solaris"]);
    }

    #[test]
    fn test_response_missing_movies_is_empty() {
        let parsed: RecommendResponse = serde_json::from_str(r#"{"note": "nothing"}"#).unwrap();
        assert!(parsed.movies.is_empty());
    }

    #[test]
    fn test_response_rejects_non_string_titles() {
        let parsed = serde_json::from_str::<RecommendResponse>(r#"{"movies": [1, 2]}"#);
        assert!(parsed.is_err());
    }
}
