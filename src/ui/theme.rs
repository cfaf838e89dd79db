//! Light and dark color themes.
//!
//! The active theme is a plain value owned by the application state and
//! passed into every render function.

use ratatui::style::{Color, Modifier, Style};

/// Visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark text on a light background
    Light,
    /// Light text on a dark background
    Dark,
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Normal text
    pub text: Color,
    /// Secondary text (descriptions, hints)
    pub dim: Color,
    /// Borders and separators
    pub border: Color,
    /// Focused widget border and prompts
    pub accent: Color,
    /// Article titles
    pub link: Color,
    /// Source labels
    pub source: Color,
    /// Date labels
    pub date: Color,
    /// Selected card background
    pub selection_bg: Color,
    /// Selected filter entries
    pub checked: Color,
}

impl Theme {
    /// Theme for the `dark_mode` flag.
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    /// Color palette of this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(32, 33, 36),
                dim: Color::Rgb(95, 99, 104),
                border: Color::Rgb(189, 193, 198),
                accent: Color::Rgb(26, 115, 232),
                link: Color::Rgb(26, 13, 171),
                source: Color::Rgb(24, 128, 56),
                date: Color::Rgb(128, 134, 139),
                selection_bg: Color::Rgb(232, 240, 254),
                checked: Color::Rgb(24, 128, 56),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(30, 30, 46),
                text: Color::Rgb(205, 214, 244),
                dim: Color::Rgb(147, 153, 178),
                border: Color::Rgb(69, 71, 90),
                accent: Color::Rgb(245, 194, 231),
                link: Color::Rgb(137, 180, 250),
                source: Color::Rgb(166, 227, 161),
                date: Color::Rgb(249, 226, 175),
                selection_bg: Color::Rgb(49, 50, 68),
                checked: Color::Rgb(166, 227, 161),
            },
        }
    }

    /// Indicator shown on the theme toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "☾ dark mode (t)",
            Theme::Dark => "☀ light mode (t)",
        }
    }
}

impl Palette {
    /// Base style for text on the screen background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border style, accented when `focused`.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}
