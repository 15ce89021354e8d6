use crate::ResultsLayout;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box;
use crate::tui::components::{Carousel, MovieList, SubmitButton, TitleBar};
use crate::tui::theme::{Palette, palette};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

/// Widest the card gets on large terminals.
const CARD_MAX_WIDTH: u16 = 64;

const HELP_TEXT: &str = "⏎ recommend  Tab/⇧Tab browse  ^T theme  ^L layout  Esc quit";
const EMPTY_HINT: &str = "Describe a mood or a genre and press Enter.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let colors = palette(app.theme);

    // Whole-screen backdrop follows the theme
    frame.render_widget(Block::default().style(colors.backdrop()), frame.area());

    let card_area = card_rect(frame.area());
    let card = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(colors.dim())
        .style(colors.base())
        .padding(Padding::horizontal(1));
    let inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    use Constraint::{Length, Min};
    let error_lines = app
        .error
        .as_deref()
        .map(|error| wrap_error(error, inner.width))
        .unwrap_or_default();
    // Wrapped message plus a spacer row
    let error_height = match error_lines.len() {
        0 => 0,
        n => n as u16 + 1,
    };
    let [title_area, _, input_area, button_area, error_area, _, results_area, help_area] =
        Layout::vertical([
            Length(1),
            Length(1),
            Length(input_box::HEIGHT),
            Length(1),
            Length(error_height),
            Length(1),
            Min(0),
            Length(1),
        ])
        .areas(inner);

    TitleBar::new(&app.status_message, app.theme, colors).render(frame, title_area);

    tui.input_box.palette = colors;
    tui.input_box.locked = app.loading;
    tui.input_box.render(frame, input_area);

    SubmitButton::new(app.loading, spinner_frame, colors).render(frame, button_area);

    if !error_lines.is_empty() {
        draw_error(frame, error_area, error_lines, colors);
    }

    draw_results(frame, results_area, app, colors);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).centered().style(colors.dim()),
        help_area,
    );
}

/// Centered card, capped at `CARD_MAX_WIDTH` columns with a one-cell margin.
pub fn card_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(2).min(CARD_MAX_WIDTH);
    let height = area.height.saturating_sub(2);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    card
}

/// Error message broken into lines no wider than `width`.
fn wrap_error(error: &str, width: u16) -> Vec<Line<'static>> {
    textwrap::wrap(error, usize::from(width.max(1)))
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

fn draw_error(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, colors: Palette) {
    let [text, _] =
        Layout::vertical([Constraint::Length(lines.len() as u16), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(lines).style(colors.error_style()), text);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, colors: Palette) {
    if app.movies.is_empty() {
        if !app.loading && app.error.is_none() {
            frame.render_widget(
                Paragraph::new(EMPTY_HINT)
                    .centered()
                    .style(colors.dim())
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        return;
    }

    match app.layout {
        ResultsLayout::List => {
            MovieList::new(&app.movies, app.active_index, colors).render(frame, area)
        }
        ResultsLayout::Carousel => {
            Carousel::new(&app.movies, app.active_index, colors).render(frame, area)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{movies, test_app};
    use crate::tui::theme::{DARK, LIGHT};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        let mut tui = TuiState::new(palette(app.theme));
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let app = test_app();
        let text = screen_text(&render(&app));
        assert!(text.contains("Movie AI"));
        assert!(text.contains("Romantic, Sci-Fi, Thriller..."));
        assert!(text.contains("Recommend"));
        assert!(text.contains("Describe a mood"));
    }

    #[test]
    fn test_loading_screen() {
        let mut app = test_app();
        update(&mut app, Action::Submit("heists".to_string()));
        let text = screen_text(&render(&app));
        assert!(text.contains("Finding movies..."));
        assert!(!text.contains("Describe a mood"));
    }

    #[test]
    fn test_results_list() {
        let mut app = test_app();
        app.movies = movies(&["Heat", "Thief"]);
        let text = screen_text(&render(&app));
        assert!(text.contains("Heat"));
        assert!(text.contains("Thief"));
    }

    #[test]
    fn test_results_carousel() {
        let mut app = test_app();
        app.layout = ResultsLayout::Carousel;
        app.movies = movies(&["Heat", "Thief", "Collateral", "Drive"]);
        app.active_index = 3;
        let text = screen_text(&render(&app));
        assert!(text.contains("Drive"));
        assert!(text.contains("Collateral"));
        assert!(!text.contains("Heat"));
        assert!(text.contains("4/4"));
    }

    #[test]
    fn test_error_is_shown() {
        let mut app = test_app();
        app.error = Some("Failed to fetch recommendations".to_string());
        let text = screen_text(&render(&app));
        assert!(text.contains("Failed to fetch recommendations"));
    }

    #[test]
    fn test_long_error_wraps_inside_card() {
        let mut app = test_app();
        app.error = Some(
            "error sending request for url (https://brain-stomer-lv5q.onrender.com/api/recommend)"
                .to_string(),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut tui = TuiState::new(palette(app.theme));
        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("error sending request"));
        assert!(text.contains("lv5q.onrender.com/api/recommend)"));
    }

    #[test]
    fn test_wrap_error_line_count() {
        assert_eq!(wrap_error("Failed to fetch recommendations", 60).len(), 1);
        assert!(wrap_error("Failed to fetch recommendations", 10).len() > 1);
        assert_eq!(wrap_error("x", 0).len(), 1);
    }

    #[test]
    fn test_every_title_reachable_in_list_layout() {
        let mut app = test_app();
        app.movies = (1..=15).map(|n| format!("Film {n:02}")).collect();
        for n in 1..=15 {
            let text = screen_text(&render(&app));
            assert!(text.contains(&format!("Film {n:02}")), "Film {n:02} never drawn");
            update(&mut app, Action::NextMovie);
        }
    }

    #[test]
    fn test_help_line_mentions_browse_keys() {
        let text = screen_text(&render(&test_app()));
        assert!(text.contains("Tab/⇧Tab browse"));
    }

    #[test]
    fn test_backdrop_follows_theme() {
        let mut app = test_app();
        let light = render(&app);
        assert_eq!(light.backend().buffer()[(0, 0)].bg, LIGHT.background);

        update(&mut app, Action::ToggleTheme);
        let dark = render(&app);
        assert_eq!(dark.backend().buffer()[(0, 0)].bg, DARK.background);
    }

    #[test]
    fn test_card_rect_is_centered_and_capped() {
        let card = card_rect(Rect::new(0, 0, 200, 40));
        assert_eq!(card.width, CARD_MAX_WIDTH);
        assert_eq!(card.height, 38);
        assert_eq!(card.x, (200 - CARD_MAX_WIDTH) / 2);

        let small = card_rect(Rect::new(0, 0, 30, 10));
        assert_eq!(small.width, 28);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(4, 3)).unwrap();
        let mut tui = TuiState::new(LIGHT);
        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();
    }
}
