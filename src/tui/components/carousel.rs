//! # Carousel Component
//!
//! Shows one recommendation at a time. The active title sits in the middle
//! at full size; its immediate neighbours are drawn smaller and dimmed on
//! either side; everything further away is not drawn at all.
//!
//! Slot and scale come from `core::carousel::placement`. This component only
//! turns them into rectangles.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::carousel::{self, CENTER_SCALE, Placement, Slot};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct Carousel<'a> {
    pub movies: &'a [String],
    pub active_index: usize,
    pub palette: Palette,
}

impl<'a> Carousel<'a> {
    pub fn new(movies: &'a [String], active_index: usize, palette: Palette) -> Self {
        Self {
            movies,
            active_index,
            palette,
        }
    }

    /// Rectangle for a card in `slot`, scaled from the full card size.
    fn card_rect(slots: [Rect; 3], slot: Slot, placement: &Placement) -> Rect {
        let column = match slot {
            Slot::Left => slots[0],
            Slot::Center => slots[1],
            Slot::Right => slots[2],
        };
        let scale = u32::from(placement.scale());
        let scaled = |len: u16| (u32::from(len) * scale / u32::from(CENTER_SCALE)) as u16;
        let width = scaled(column.width);
        let height = scaled(column.height).max(3.min(column.height));

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        // Side cards lean towards the centre card
        let flex = match slot {
            Slot::Left => Flex::End,
            Slot::Center => Flex::Center,
            Slot::Right => Flex::Start,
        };
        let [rect] = Layout::horizontal([Constraint::Length(width)])
            .flex(flex)
            .areas(row);
        rect
    }

    fn card(&self, title: &str, index: usize, slot: Slot, width: u16) -> Paragraph<'static> {
        let inner = width.saturating_sub(2).max(1) as usize;
        let lines: Vec<Line> = textwrap::wrap(title, inner)
            .into_iter()
            .map(|l| Line::from(l.into_owned()))
            .collect();

        let (style, border) = match slot {
            Slot::Center => (
                self.palette.base().add_modifier(Modifier::BOLD),
                Style::default().fg(self.palette.accent),
            ),
            Slot::Left | Slot::Right => (
                self.palette.dim(),
                Style::default()
                    .fg(self.palette.secondary)
                    .add_modifier(Modifier::DIM),
            ),
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border);
        if slot == Slot::Center {
            block = block.title_bottom(
                Line::from(format!(" {}/{} ", index + 1, self.movies.len())).centered(),
            );
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
    }
}

impl Component for Carousel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.movies.is_empty() {
            return;
        }

        let [cards_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let slots: [Rect; 3] = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .areas(cards_area);

        for (index, placement) in carousel::visible(self.active_index, self.movies.len()) {
            let Some(slot) = placement.slot else {
                continue;
            };
            let rect = Self::card_rect(slots, slot, &placement);
            if rect.width < 3 || rect.height < 3 {
                continue;
            }
            let card = self.card(&self.movies[index], index, slot, rect.width);
            frame.render_widget(card, rect);
        }

        frame.render_widget(
            Paragraph::new("◀ Shift+Tab   Tab ▶")
                .alignment(Alignment::Center)
                .style(self.palette.dim()),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movies;
    use crate::tui::theme::DARK;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(titles: &[String], active: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        terminal
            .draw(|f| Carousel::new(titles, active, DARK).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_active_and_neighbours_only() {
        let titles = movies(&["Amelie", "Brazil", "Casablanca", "Dune", "Eraserhead"]);
        let text = draw(&titles, 2);
        assert!(text.contains("Casablanca"));
        assert!(text.contains("Brazil"));
        assert!(text.contains("Dune"));
        assert!(!text.contains("Amelie"));
        assert!(!text.contains("Eraserhead"));
        assert!(text.contains("3/5"));
    }

    #[test]
    fn test_first_item_has_no_left_neighbour() {
        let titles = movies(&["Amelie", "Brazil", "Casablanca"]);
        let text = draw(&titles, 0);
        assert!(text.contains("Amelie"));
        assert!(text.contains("Brazil"));
        assert!(!text.contains("Casablanca"));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let text = draw(&[], 0);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_neighbour_borders_use_secondary_colour() {
        let titles = movies(&["Amelie", "Brazil", "Casablanca"]);
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        terminal
            .draw(|f| Carousel::new(&titles, 1, DARK).render(f, f.area()))
            .unwrap();
        let corners: Vec<_> = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| c.symbol() == "╭")
            .map(|c| c.fg)
            .collect();
        assert_eq!(corners.len(), 3);
        assert_eq!(corners.iter().filter(|&&fg| fg == DARK.secondary).count(), 2);
        assert_eq!(corners.iter().filter(|&&fg| fg == DARK.accent).count(), 1);
    }

    #[test]
    fn test_side_cards_are_smaller() {
        let slots = [
            Rect::new(0, 0, 20, 10),
            Rect::new(20, 0, 40, 10),
            Rect::new(60, 0, 20, 10),
        ];
        let center = Carousel::card_rect(slots, Slot::Center, &carousel::placement(1, 1, 3));
        let left = Carousel::card_rect(slots, Slot::Left, &carousel::placement(0, 1, 3));
        assert_eq!(center.width, 40);
        assert_eq!(left.width, 16);
        assert!(left.height < center.height);
        // Left card hugs the centre column
        assert_eq!(left.x + left.width, 20);
    }
}
