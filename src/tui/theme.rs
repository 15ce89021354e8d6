//! # Palettes
//!
//! Maps the core `Theme` flag onto concrete terminal colors. Each theme has
//! exactly one palette; the background fills the whole terminal, the same
//! way the page background follows the theme.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-screen backdrop
    pub background: Color,
    /// The card holding the input and results
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    /// Border of the carousel neighbour cards
    pub secondary: Color,
    pub error: Color,
    pub input_background: Color,
    pub input_text: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xe0, 0xe7, 0xff),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x11, 0x18, 0x27),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x63, 0x66, 0xf1),
    secondary: Color::Rgb(0x22, 0xd3, 0xee),
    error: Color::Rgb(0xef, 0x44, 0x44),
    input_background: Color::Rgb(0xff, 0xff, 0xff),
    input_text: Color::Rgb(0x00, 0x00, 0x00),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x02, 0x06, 0x17),
    surface: Color::Rgb(0x0f, 0x17, 0x2a),
    text: Color::Rgb(0xe5, 0xe7, 0xeb),
    muted: Color::Rgb(0x94, 0xa3, 0xb8),
    accent: Color::Rgb(0x63, 0x66, 0xf1),
    secondary: Color::Rgb(0x22, 0xd3, 0xee),
    error: Color::Rgb(0xef, 0x44, 0x44),
    input_background: Color::Rgb(0x02, 0x06, 0x17),
    input_text: Color::Rgb(0xff, 0xff, 0xff),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn backdrop(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).bg(self.surface)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).bg(self.surface)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_theme_has_its_own_palette() {
        assert_eq!(palette(Theme::Light), LIGHT);
        assert_eq!(palette(Theme::Dark), DARK);
        assert_ne!(LIGHT, DARK);
    }

    #[test]
    fn test_toggle_round_trips_palette() {
        let theme = Theme::Light;
        assert_eq!(palette(theme.toggle()), DARK);
        assert_eq!(palette(theme.toggle().toggle()), LIGHT);
    }
}
