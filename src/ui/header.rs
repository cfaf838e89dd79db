//! Header widget rendering.
//!
//! Displays the application title and the theme toggle.

use crate::ui::theme::{Palette, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the header widget.
///
/// # Arguments
/// * `theme` - Active theme, labels the toggle
/// * `palette` - Colors of the active theme
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_header(theme: Theme, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            "News Aggregator",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(theme.toggle_label(), Style::default().fg(palette.dim)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border_style(false))
                .style(palette.base()),
        );

    Widget::render(paragraph, area, buf);
}
