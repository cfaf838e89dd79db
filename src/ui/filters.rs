//! Filter dropdown rendering.
//!
//! Draws the date, author and source filters as a popup anchored under
//! the search bar.

use crate::app::App;
use crate::panel::FilterField;
use crate::ui::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const DROPDOWN_WIDTH: u16 = 52;

/// Area of the dropdown for a given search bar and screen.
///
/// # Arguments
/// * `search` - Area of the search bar
/// * `screen` - Whole frame area
/// * `source_count` - Number of sources listed
///
/// # Details
/// Right-aligned under the search bar, clipped to the screen.
pub fn dropdown_area(search: Rect, screen: Rect, source_count: usize) -> Rect {
    let width = DROPDOWN_WIDTH.min(search.width);
    let wanted = u16::try_from(source_count)
        .unwrap_or(u16::MAX)
        .saturating_add(7);
    let top = search.y + search.height;
    let height = wanted.min(screen.height.saturating_sub(top));
    Rect::new(search.x + search.width - width, top, width, height)
}

/// Render the filter dropdown.
///
/// # Arguments
/// * `app` - Application state
/// * `palette` - Colors of the active theme
/// * `area` - Area from [`dropdown_area`]
/// * `buf` - Buffer to render to
pub fn render_filters(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let panel = &app.panel;
    let label = |field: FilterField, text: &'static str| {
        let style = if panel.focus == field {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        Span::styled(text, style)
    };

    let mut lines = Vec::with_capacity(6 + panel.sources().len());

    let date = panel
        .filters
        .date
        .map(|d| d.label())
        .unwrap_or("Any time");
    lines.push(Line::from(vec![
        label(FilterField::Date, "Date:    "),
        Span::styled(format!("< {} >", date), Style::default().fg(palette.date)),
    ]));

    let mut author_spans = vec![
        label(FilterField::Authors, "Authors: "),
        Span::styled(panel.authors_input.as_str(), Style::default().fg(palette.text)),
    ];
    if panel.focus == FilterField::Authors {
        author_spans.push(Span::styled("_", Style::default().fg(palette.accent)));
    }
    lines.push(Line::from(author_spans));

    lines.push(Line::from(label(FilterField::Sources, "Sources:")));
    for (idx, source) in panel.sources().iter().enumerate() {
        let checked = panel.filters.sources.contains(source);
        let mark = if checked { "[x] " } else { "[ ] " };
        let mut style = Style::default().fg(if checked { palette.checked } else { palette.text });
        if panel.focus == FilterField::Sources && idx == panel.source_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}{}", mark, source), style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Tab: field  ←/→: date  Space: toggle  Ctrl+X: clear  Enter: apply",
        Style::default().fg(palette.dim),
    )));

    Widget::render(Clear, area, buf);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Filters")
            .borders(Borders::ALL)
            .border_style(palette.border_style(true))
            .style(palette.base()),
    );
    Widget::render(paragraph, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::DateRange;
    use crate::ui::theme::Theme;

    #[test]
    fn test_dropdown_area_under_search_bar() {
        let screen = Rect::new(0, 0, 100, 40);
        let search = Rect::new(0, 3, 100, 3);
        let area = dropdown_area(search, screen, 4);
        assert_eq!(area, Rect::new(48, 6, 52, 11));
    }

    #[test]
    fn test_dropdown_area_clipped_to_screen() {
        let screen = Rect::new(0, 0, 30, 10);
        let search = Rect::new(0, 3, 30, 3);
        let area = dropdown_area(search, screen, 10);
        assert_eq!(area, Rect::new(0, 6, 30, 4));
    }

    #[test]
    fn test_dropdown_area_huge_whitelist_saturates() {
        let screen = Rect::new(0, 0, 80, 50);
        let search = Rect::new(0, 2, 80, 3);
        let area = dropdown_area(search, screen, usize::from(u16::MAX) + 10);
        assert_eq!(area, Rect::new(28, 5, 52, 45));
    }

    #[test]
    fn test_render_filters_shows_selection() {
        let mut app = App::new(vec!["bbc.com".to_string(), "cnn.com".to_string()], false);
        app.panel.toggle_dropdown();
        app.panel.filters.date = Some(DateRange::Week);
        app.panel.toggle_source("cnn.com");

        let area = Rect::new(0, 0, 52, 9);
        let mut buf = Buffer::empty(area);
        render_filters(&app, &Theme::Light.palette(), area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("< Past week >"));
        assert!(text.contains("[ ] bbc.com"));
        assert!(text.contains("[x] cnn.com"));
    }
}
