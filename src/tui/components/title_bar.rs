//! # TitleBar Component
//!
//! Header row of the card: app title and status on the left, the theme
//! toggle on the right.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"🎬 Movie AI | 3 recommendations"`
//! 2. **Default**: `"🎬 Movie AI"`
//!
//! The toggle shows the icon of the theme you would switch *to*, so it
//! reads `🌙` in light mode and `☀️` in dark mode.
//!
//! TitleBar is purely presentational: all fields are props, there is no
//! internal state.

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "🎬 Movie AI";

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub theme: Theme,
    pub palette: Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str, theme: Theme, palette: Palette) -> Self {
        Self {
            status_message,
            theme,
            palette,
        }
    }

    fn toggle_label(&self) -> String {
        format!("{} ^T", self.theme.toggle_icon())
    }

    /// Columns reserved for the toggle, one of them padding.
    fn toggle_width(&self) -> u16 {
        UnicodeWidthStr::width(self.toggle_label().as_str()) as u16 + 1
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let toggle = self.toggle_label();
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(self.toggle_width())])
                .areas(area);

        let mut spans = vec![Span::styled(
            TITLE,
            self.palette.base().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", self.palette.dim()));
            spans.push(Span::styled(self.status_message, self.palette.dim()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(self.palette.base()), left);
        frame.render_widget(
            Paragraph::new(toggle)
                .right_aligned()
                .style(Style::default().fg(self.palette.accent).bg(self.palette.surface)),
            right,
        );
    }
}
