//! # InputBox Component
//!
//! The prompt field: a single-line text input with a placeholder.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor and word movement, paste)
//! - Handle submission (Enter)
//! - Keep the cursor visible when the prompt outgrows the field
//!
//! ## State Management
//!
//! The buffer is internal state and is *not* cleared on submit: the prompt
//! stays put so it can be tweaked and resubmitted. The palette and the
//! `locked` flag are props from the application state.

mod editing;
mod viewport;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

use editing::{next_char, next_word, prev_char, prev_word};

pub const PLACEHOLDER: &str = "Romantic, Sci-Fi, Thriller...";

/// Rows used by the bordered field.
pub const HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged(String),
    /// Only the cursor moved
    CursorMoved,
}

/// Prompt input component.
///
/// # Props
///
/// - `palette`: Colors for the current theme
/// - `locked`: A request is in flight (drawn dimmed; editing still works)
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Byte offset of the cursor in `buffer`
/// - `scroll`: Byte offset of the first visible char
pub struct InputBox {
    pub buffer: String,
    pub palette: Palette,
    pub locked: bool,
    cursor: usize,
    scroll: usize,
}

impl InputBox {
    pub fn new(palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            palette,
            locked: false,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::ContentChanged(self.buffer.clone()))
    }

    fn move_to(&mut self, pos: usize) -> Option<InputEvent> {
        (pos != self.cursor).then(|| {
            self.cursor = pos;
            InputEvent::CursorMoved
        })
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.locked {
            Style::default().fg(self.palette.muted)
        } else {
            Style::default().fg(self.palette.accent)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(
                Style::default()
                    .fg(self.palette.input_text)
                    .bg(self.palette.input_background),
            );
        let inner = block.inner(area);

        let view = viewport::scroll(&self.buffer, self.cursor, &mut self.scroll, inner.width);
        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(self.palette.muted),
            ))
        } else {
            Line::from(view.text)
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + view.cursor_col, inner.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // The prompt is a single line
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::DeleteWord => {
                if self.cursor == 0 {
                    return None;
                }
                let start = prev_word(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => self.move_to(prev_char(&self.buffer, self.cursor)),
            TuiEvent::CursorRight => self.move_to(next_char(&self.buffer, self.cursor)),
            TuiEvent::WordLeft => self.move_to(prev_word(&self.buffer, self.cursor)),
            TuiEvent::WordRight => self.move_to(next_word(&self.buffer, self.cursor)),
            TuiEvent::CursorHome => self.move_to(0),
            TuiEvent::CursorEnd => self.move_to(self.buffer.len()),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
