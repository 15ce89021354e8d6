//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! ```text
//! Enter → InputEvent::Submit → update(Action::Submit) → Effect::FetchRecommendations
//!       → tokio::spawn(run_request) → mpsc → update(Action::Recommendations*)
//! ```
//!
//! The spawned task is never aborted: there is no cancellation. A response
//! that arrives for an old request id is dropped by the reducer.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, run_request, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::recommend::{HttpRecommender, RecommendationService};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new(palette: Palette) -> Self {
        Self {
            input_box: InputBox::new(palette),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets Ctrl+Backspace and friends through; terminals
        // that don't support it ignore the sequence
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the recommendation service from a resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn RecommendationService> {
    Arc::new(HttpRecommender::new(&config.base_url, &config.path))
}

/// Map a terminal event that isn't text editing onto a core action.
fn global_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
        TuiEvent::ToggleLayout => Some(Action::ToggleLayout),
        TuiEvent::NextMovie => Some(Action::NextMovie),
        TuiEvent::PreviousMovie => Some(Action::PreviousMovie),
        _ => None,
    }
}

/// Translate an `InputBox` event into a core action.
fn input_action(event: InputEvent) -> Option<Action> {
    match event {
        InputEvent::Submit(text) => Some(Action::Submit(text)),
        InputEvent::ContentChanged(text) => Some(Action::EditPrompt(text)),
        InputEvent::CursorMoved => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config);
    info!("Using {} service at {}", service.name(), config.endpoint());
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new(theme::palette(app.theme));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if app.loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = global_action(&event)
                .or_else(|| tui.input_box.handle_event(&event).and_then(input_action));

            if let Some(action) = action
                && dispatch(&mut app, action, &tx) == Effect::Quit
            {
                break 'main;
            }
        }

        // Settled requests from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) == Effect::Quit {
                break 'main;
            }
        }
    }

    info!("Reel shutting down");
    ratatui::restore();
    Ok(())
}

/// Apply an action and carry out the effect it asks for.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    if let Effect::FetchRecommendations { request_id, prompt } = &effect {
        spawn_request(app.service.clone(), *request_id, prompt.clone(), tx.clone());
    }
    effect
}

fn spawn_request(
    service: Arc<dyn RecommendationService>,
    request_id: u64,
    prompt: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning recommendation request {}", request_id);
    tokio::spawn(async move {
        let started = Instant::now();
        let action = run_request(service, request_id, prompt).await;
        debug!(
            "Request {} settled after {}ms",
            request_id,
            started.elapsed().as_millis()
        );
        if tx.send(action).is_err() {
            warn!("Failed to deliver result of request {}: receiver dropped", request_id);
        }
    });
}
