//! # Actions
//!
//! Everything that can happen in Reel becomes an `Action`.
//! User presses Enter? That's `Action::Submit(prompt)`.
//! Service responds? That's `Action::RecommendationsReceived { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller should
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::carousel;
use crate::core::state::App;
use crate::recommend::RecommendationService;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The prompt text changed (every keystroke).
    EditPrompt(String),
    /// User asked for recommendations for this prompt.
    Submit(String),
    /// The request tagged `request_id` succeeded.
    RecommendationsReceived { request_id: u64, movies: Vec<String> },
    /// The request tagged `request_id` failed with a user-facing message.
    RecommendationFailed { request_id: u64, message: String },
    NextMovie,
    PreviousMovie,
    ToggleTheme,
    ToggleLayout,
    Quit,
}

/// I/O the event loop should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn exactly one recommendation request.
    FetchRecommendations { request_id: u64, prompt: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditPrompt(text) => {
            app.prompt = text;
            Effect::None
        }
        Action::Submit(text) => {
            app.prompt = text;
            if app.loading {
                debug!("Submit ignored: request {} still in flight", app.request_id);
                return Effect::None;
            }
            if app.prompt.trim().is_empty() {
                debug!("Submit ignored: empty prompt");
                return Effect::None;
            }

            app.request_id += 1;
            app.loading = true;
            app.error = None;
            app.movies.clear();
            app.active_index = 0;
            app.status_message = String::from("Finding movies...");
            info!("Submitting request {}", app.request_id);

            Effect::FetchRecommendations {
                request_id: app.request_id,
                prompt: app.prompt.clone(),
            }
        }
        Action::RecommendationsReceived { request_id, movies } => {
            if request_id != app.request_id {
                warn!(
                    "Dropping stale response for request {} (current is {})",
                    request_id, app.request_id
                );
                return Effect::None;
            }
            info!("Request {} returned {} movies", request_id, movies.len());
            app.loading = false;
            app.status_message = match movies.len() {
                0 => String::from("No recommendations"),
                1 => String::from("1 recommendation"),
                n => format!("{n} recommendations"),
            };
            app.movies = movies;
            app.active_index = 0;
            Effect::None
        }
        Action::RecommendationFailed { request_id, message } => {
            if request_id != app.request_id {
                warn!(
                    "Dropping stale failure for request {} (current is {})",
                    request_id, app.request_id
                );
                return Effect::None;
            }
            warn!("Request {} failed: {}", request_id, message);
            app.loading = false;
            app.error = Some(message);
            app.status_message.clear();
            Effect::None
        }
        Action::NextMovie => {
            app.active_index = carousel::next_index(app.active_index, app.movies.len());
            debug!("Active movie: {:?}", app.active_movie());
            Effect::None
        }
        Action::PreviousMovie => {
            app.active_index = carousel::prev_index(app.active_index, app.movies.len());
            debug!("Active movie: {:?}", app.active_movie());
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            debug!("Theme is now {:?}", app.theme);
            Effect::None
        }
        Action::ToggleLayout => {
            app.layout = app.layout.toggle();
            debug!("Layout is now {:?}", app.layout);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Run one request against `service` and turn the outcome into the action
/// that settles it. Failures never escape: they become a display string.
pub async fn run_request(
    service: Arc<dyn RecommendationService>,
    request_id: u64,
    prompt: String,
) -> Action {
    match service.recommend(&prompt).await {
        Ok(movies) => Action::RecommendationsReceived { request_id, movies },
        Err(e) => Action::RecommendationFailed {
            request_id,
            message: e.to_string(),
        },
    }
}
