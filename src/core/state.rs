//! # Application State
//!
//! Core business state for Reel. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn RecommendationService>  // remote recommender
//! ├── prompt: String                // what the user typed
//! ├── movies: Vec<String>           // titles from the last success
//! ├── loading: bool                 // request in flight
//! ├── error: Option<String>         // last failure, shown under the input
//! ├── theme: Theme                  // light / dark
//! ├── layout: ResultsLayout         // list / carousel
//! ├── active_index: usize           // carousel position in `movies`
//! ├── request_id: u64               // id of the latest submission
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::ResultsLayout;
use crate::core::config::ResolvedConfig;
use crate::core::theme::Theme;
use crate::recommend::RecommendationService;

pub struct App {
    pub service: Arc<dyn RecommendationService>,
    pub prompt: String,
    pub movies: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub theme: Theme,
    pub layout: ResultsLayout,
    pub active_index: usize,
    /// Bumped on every accepted submission. Responses tagged with an older
    /// id are stale and get dropped.
    pub request_id: u64,
    pub status_message: String,
}

impl App {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            service,
            prompt: String::new(),
            movies: Vec::new(),
            loading: false,
            error: None,
            theme: Theme::default(),
            layout: ResultsLayout::default(),
            active_index: 0,
            request_id: 0,
            status_message: String::from("Welcome to Reel!"),
        }
    }

    pub fn from_config(service: Arc<dyn RecommendationService>, config: &ResolvedConfig) -> Self {
        Self {
            theme: config.theme,
            layout: config.layout,
            ..Self::new(service)
        }
    }

    /// The title under the carousel cursor, if any.
    pub fn active_movie(&self) -> Option<&str> {
        self.movies.get(self.active_index).map(String::as_str)
    }
}
