//! # MovieList Component
//!
//! Every recommendation on its own row, in the order the service returned
//! them. Titles too wide for the card are truncated with an ellipsis.
//!
//! The row at `active_index` is highlighted, and the list scrolls to keep it
//! in view, so Tab / Shift+Tab reach titles below the fold.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

use super::truncate_to_width;

pub const BULLET: &str = "🍿 ";

pub struct MovieList<'a> {
    pub movies: &'a [String],
    pub active_index: usize,
    pub palette: Palette,
}

impl<'a> MovieList<'a> {
    pub fn new(movies: &'a [String], active_index: usize, palette: Palette) -> Self {
        Self {
            movies,
            active_index,
            palette,
        }
    }
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Bullet is two columns wide plus a space
        let title_width = (area.width as usize).saturating_sub(3);
        let items: Vec<ListItem> = self
            .movies
            .iter()
            .map(|title| {
                ListItem::new(Line::from(vec![
                    Span::raw(BULLET),
                    Span::raw(truncate_to_width(title, title_width)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .style(self.palette.base())
            .highlight_style(self.palette.highlight());
        let mut state = ListState::default().with_selected(Some(self.active_index));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movies;
    use crate::tui::theme::LIGHT;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_renders_titles_in_order() {
        let titles = movies(&["Alien", "Arrival", "Solaris"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| MovieList::new(&titles, 0, LIGHT).render(f, f.area()))
            .unwrap();
        let rows = rows(&terminal);
        assert!(rows[0].contains("Alien"));
        assert!(rows[1].contains("Arrival"));
        assert!(rows[2].contains("Solaris"));
        assert!(rows[3].trim().is_empty());
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let titles = movies(&["Dr. Strangelove or: How I Learned to Stop Worrying"]);
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|f| MovieList::new(&titles, 0, LIGHT).render(f, f.area()))
            .unwrap();
        assert!(rows(&terminal)[0].contains("..."));
    }

    #[test]
    fn test_scrolls_to_active_row() {
        let titles: Vec<String> = (1..=10).map(|n| format!("Film {n:02}")).collect();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();

        terminal
            .draw(|f| MovieList::new(&titles, 0, LIGHT).render(f, f.area()))
            .unwrap();
        assert!(rows(&terminal)[0].contains("Film 01"));
        assert!(!rows(&terminal).iter().any(|r| r.contains("Film 10")));

        terminal
            .draw(|f| MovieList::new(&titles, 9, LIGHT).render(f, f.area()))
            .unwrap();
        let rows = rows(&terminal);
        assert!(rows[3].contains("Film 10"));
        assert!(rows[0].contains("Film 07"));
    }

    #[test]
    fn test_active_row_is_highlighted() {
        let titles = movies(&["Alien", "Arrival"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        terminal
            .draw(|f| MovieList::new(&titles, 1, LIGHT).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(5, 1)].bg, LIGHT.accent);
        assert_ne!(buffer[(5, 0)].bg, LIGHT.accent);
    }
}
