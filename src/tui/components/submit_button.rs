//! # SubmitButton Component
//!
//! Full-width button under the prompt. Reads `Recommend` when idle and
//! `Finding movies...` with a spinner while a request is in flight, when it
//! is also drawn disabled.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const IDLE_LABEL: &str = "Recommend";
pub const LOADING_LABEL: &str = "Finding movies...";

pub struct SubmitButton {
    pub loading: bool,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl SubmitButton {
    pub fn new(loading: bool, spinner_frame: usize, palette: Palette) -> Self {
        Self {
            loading,
            spinner_frame,
            palette,
        }
    }

    pub fn label(&self) -> String {
        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("{} {}", glyph, LOADING_LABEL)
        } else {
            format!("{} ⏎", IDLE_LABEL)
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.loading {
            Style::default()
                .fg(Color::White)
                .bg(self.palette.muted)
                .add_modifier(Modifier::DIM)
        } else {
            self.palette.highlight()
        };

        frame.render_widget(
            Paragraph::new(self.label())
                .alignment(Alignment::Center)
                .style(style),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::LIGHT;

    #[test]
    fn test_idle_label() {
        assert!(SubmitButton::new(false, 0, LIGHT).label().starts_with("Recommend"));
    }

    #[test]
    fn test_loading_label_spins() {
        let a = SubmitButton::new(true, 0, LIGHT).label();
        let b = SubmitButton::new(true, 1, LIGHT).label();
        assert!(a.ends_with("Finding movies..."));
        assert_ne!(a, b);
        // Wraps instead of indexing past the end
        assert_eq!(SubmitButton::new(true, SPINNER.len(), LIGHT).label(), a);
    }
}
