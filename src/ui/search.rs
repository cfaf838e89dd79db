//! Search widget rendering.
//!
//! Displays the query input bar and a summary of the active filters.

use crate::app::{App, UiMode};
use crate::ui::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `palette` - Colors of the active theme
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Highlights when the query field has focus. The block title shows how
/// many filters are set.
pub fn render_search(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Query && !app.panel.is_dropdown_open();
    let prompt = if is_active { "Search: " } else { "Search (press '/'): " };

    let mut spans = vec![Span::styled(
        prompt,
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )];
    if app.panel.query.is_empty() && !is_active {
        spans.push(Span::styled(
            "Search for articles...",
            Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            app.panel.query.as_str(),
            Style::default().fg(palette.text),
        ));
    }
    if is_active {
        spans.push(Span::styled("_", Style::default().fg(palette.accent)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(filter_title(app))
            .borders(Borders::ALL)
            .border_style(palette.border_style(is_active))
            .style(palette.base()),
    );

    Widget::render(paragraph, area, buf);
}

fn filter_title(app: &App) -> String {
    let filters = &app.panel.filters;
    if !filters.is_active() {
        return "Search ─ filters (f)".to_string();
    }
    let count = usize::from(filters.date.is_some())
        + usize::from(filters.authors.is_some())
        + usize::from(!filters.sources.is_empty());
    format!("Search ─ filters (f) [{} active]", count)
}
